mod model;
mod test_error;
