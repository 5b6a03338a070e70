use super::*;

#[test]
fn ai_model_endpoint_formats_expected_path() {
    assert_eq!(ai_model_endpoint("m-1"), "/api/ai-models/m-1");
}

#[test]
fn ai_model_action_endpoint_appends_action() {
    assert_eq!(ai_model_action_endpoint("m-1", "toggle-default"), "/api/ai-models/m-1/toggle-default");
    assert_eq!(ai_model_action_endpoint("m-1", "toggle-status"), "/api/ai-models/m-1/toggle-status");
}

#[test]
fn follow_up_endpoints_format_expected_paths() {
    assert_eq!(follow_up_endpoint("f-9"), "/api/follow-ups/f-9");
    assert_eq!(follow_up_action_endpoint("f-9", "toggle-status"), "/api/follow-ups/f-9/toggle-status");
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status { status: 500 }.to_string(), "request failed with status 500");
    assert_eq!(ApiError::Request("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(fetch_ai_models());
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(HttpApi.toggle_default("m-1"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn id_mutations_are_unavailable_outside_the_browser() {
    let payload = AiModelPayload::default();
    assert_eq!(futures::executor::block_on(update_ai_model("m-1", &payload)), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(delete_ai_model("m-1")), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(toggle_ai_model_status("m-1")), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(delete_follow_up("f-9")), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(toggle_follow_up_status("f-9")), Err(ApiError::Unavailable));
}
