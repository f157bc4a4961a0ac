use crate::common::{rejection_of, start_backend};
use assert_json_diff::assert_json_eq;
use auction_client::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn get_questions_resolves_with_list() {
    let (mut server, client) = start_backend().await;
    let body = json!([
        {"question_id": 1, "question_text": "Is it red?", "answer_text": null}
    ]);
    let mock = server
        .mock("GET", "/item/5/question")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let questions = client.get_questions("5").await.unwrap();

    mock.assert_async().await;
    assert_json_eq!(questions.clone(), body);
    let typed: Vec<Question> = decode(questions).unwrap();
    assert!(!typed[0].is_answered());
}

#[tokio::test]
async fn get_questions_failure_rejects_with_generic_message() {
    let (mut server, client) = start_backend().await;
    let _mock = server
        .mock("GET", "/item/5/question")
        .with_status(500)
        .create_async()
        .await;

    let err = client.get_questions("5").await.unwrap_err();

    assert_eq!(rejection_of(err), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn ask_question_posts_text_with_token() {
    let (mut server, client) = start_backend().await;
    let token = SessionToken::new("s3ss10n");
    let mock = server
        .mock("POST", "/item/5/question")
        .match_header("x-authorization", "s3ss10n")
        .match_body(Matcher::Json(json!({"question_text": "Is it red?"})))
        .with_status(200)
        .with_body(r#"{"question_id":11}"#)
        .create_async()
        .await;

    let created = client
        .ask_question("5", "Is it red?", Some(&token))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_json_eq!(created, json!({"question_id": 11}));
}

#[tokio::test]
async fn ask_question_rejection_surfaces_server_message() {
    let (mut server, client) = start_backend().await;
    let _mock = server
        .mock("POST", "/item/5/question")
        .with_status(403)
        .with_body(r#"{"error_message":"You cannot ask about your own item"}"#)
        .create_async()
        .await;

    let err = client
        .ask_question("5", "Is it red?", Some(&SessionToken::new("t")))
        .await
        .unwrap_err();

    assert_eq!(rejection_of(err), "You cannot ask about your own item");
}

#[tokio::test]
async fn ask_question_empty_message_uses_fallback() {
    let (mut server, client) = start_backend().await;
    let _mock = server
        .mock("POST", "/item/5/question")
        .with_status(400)
        .with_body(r#"{"error_message":""}"#)
        .create_async()
        .await;

    let err = client
        .ask_question("5", "", Some(&SessionToken::new("t")))
        .await
        .unwrap_err();

    assert_eq!(rejection_of(err), ASK_QUESTION_FAILURE_MESSAGE);
}

#[tokio::test]
async fn answer_question_posts_answer_to_question_path() {
    let (mut server, client) = start_backend().await;
    let token = SessionToken::new("seller");
    let mock = server
        .mock("POST", "/question/9")
        .match_header("x-authorization", "seller")
        .match_body(Matcher::Json(json!({"answer_text": "Yes"})))
        .with_status(200)
        .with_body(r#"{"question_id":9,"question_text":"Is it red?","answer_text":"Yes"}"#)
        .create_async()
        .await;

    let answered = client.answer_question("9", "Yes", Some(&token)).await.unwrap();

    mock.assert_async().await;
    let question: Question = decode(answered).unwrap();
    assert_eq!(question.question_id, Some(9));
    assert!(question.is_answered());
}

#[tokio::test]
async fn answer_question_failure_without_message_uses_fallback() {
    let (mut server, client) = start_backend().await;
    let _mock = server
        .mock("POST", "/question/9")
        .with_status(401)
        .with_body("{}")
        .create_async()
        .await;

    let err = client
        .answer_question("9", "Yes", None)
        .await
        .unwrap_err();

    assert_eq!(rejection_of(err), "Failed to answer question");
}

#[tokio::test]
async fn answer_question_only_accepts_ok() {
    let (mut server, client) = start_backend().await;
    let _mock = server
        .mock("POST", "/question/9")
        .with_status(201)
        .with_body(r#"{"question_id":9}"#)
        .create_async()
        .await;

    let err = client
        .answer_question("9", "Yes", Some(&SessionToken::new("t")))
        .await
        .unwrap_err();

    assert_eq!(rejection_of(err), ANSWER_QUESTION_FAILURE_MESSAGE);
}
