/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Navigation history over the route table
pub mod history;
/// Static route table and path matching
pub mod route;

pub use history::{Location, Router};
pub use route::{ROUTES, RouteName, RouteRecord, View, resolve, routes};
