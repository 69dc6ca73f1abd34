//! End-to-end guest verification: evaluator verdict, prompt, verify, resume.

use std::sync::Arc;

use access_core::models::{Action, ResourceDescriptor};
use access_core::services::{
    FlowState, MemorySessionCache, MockGuestVerifier, ResumedAction, ServiceError,
    ACCESS_TOKEN_KEY, PROFILE_KEY,
};
use access_core::AccessContext;
use secrecy::ExposeSecret;

fn anonymous_context(verifier: Arc<MockGuestVerifier>) -> AccessContext {
    AccessContext::new(Arc::new(MemorySessionCache::new()), verifier)
}

#[tokio::test]
async fn anonymous_delete_of_guest_post_verifies_then_attaches_secret() {
    let verifier = Arc::new(MockGuestVerifier::accepting("0417"));
    let context = anonymous_context(Arc::clone(&verifier));
    let post = ResourceDescriptor::guest_qna();

    // The delete control is rendered, but invoking it must route into the
    // prompt rather than the delete call.
    let controls = context.controls(&post);
    assert!(controls.show_delete);
    assert!(controls.needs_guest_prompt);
    assert!(context.decide(&post, Action::Delete).needs_guest_verification());

    let mut flow = context.guest_flow();
    flow.begin(Action::Delete, "q7");
    flow.input_secret("0417").unwrap();

    let resumed = flow.submit().await.unwrap();
    assert_eq!(flow.state(), FlowState::Resumed);

    // Deletion resumes with the verified secret attached to the call.
    match resumed {
        ResumedAction::DeleteWithSecret {
            resource_id,
            secret,
        } => {
            assert_eq!(resource_id, "q7");
            assert_eq!(secret.expose_secret(), "0417");
        }
        other => panic!("expected DeleteWithSecret, got {:?}", other),
    }

    // The verifier was consulted for exactly this resource.
    assert_eq!(*verifier.requests.lock().unwrap(), vec!["q7"]);
}

#[tokio::test]
async fn edit_resumes_by_opening_the_editor_without_carrying_proof() {
    let context = anonymous_context(Arc::new(MockGuestVerifier::accepting("0417")));

    let mut flow = context.guest_flow();
    flow.begin(Action::Edit, "q3");
    flow.input_secret("0417").unwrap();

    match flow.submit().await.unwrap() {
        ResumedAction::OpenEditor { resource_id } => assert_eq!(resource_id, "q3"),
        other => panic!("expected OpenEditor, got {:?}", other),
    }
}

#[tokio::test]
async fn authenticated_non_author_is_offered_the_same_prompt() {
    // Deliberate behavior: secret-holders need not be the original poster's
    // session, so an authenticated actor may still attempt the shared secret.
    let cache = Arc::new(MemorySessionCache::new());
    cache.insert(ACCESS_TOKEN_KEY, "tok");
    cache.insert(PROFILE_KEY, r#"{"id":"u9","is_admin":false}"#);
    let verifier = Arc::new(MockGuestVerifier::accepting("0417"));
    let context = AccessContext::new(
        Arc::clone(&cache) as Arc<dyn access_core::services::SessionCache>,
        Arc::clone(&verifier) as Arc<dyn access_core::services::GuestVerifier>,
    );
    let post = ResourceDescriptor::guest_qna();

    assert!(context.decide(&post, Action::Edit).needs_guest_verification());

    let mut flow = context.guest_flow();
    flow.begin(Action::Edit, "q5");
    flow.input_secret("0417").unwrap();
    assert!(flow.submit().await.is_ok());
}

#[tokio::test]
async fn failed_attempts_return_to_the_prompt_with_no_lockout() {
    let context = anonymous_context(Arc::new(MockGuestVerifier::accepting("0417")));

    let mut flow = context.guest_flow();
    flow.begin(Action::Delete, "q7");

    for wrong in ["0000", "1111", "2222"] {
        flow.input_secret(wrong).unwrap();
        let err = flow.submit().await.unwrap_err();
        assert!(matches!(err, ServiceError::VerificationFailed));
        assert_eq!(flow.state(), FlowState::Failed);
        flow.acknowledge_failure();
        assert_eq!(flow.state(), FlowState::Prompting);
    }

    flow.input_secret("0417").unwrap();
    assert!(flow.submit().await.is_ok());
}

#[tokio::test]
async fn cancel_takes_no_action() {
    let verifier = Arc::new(MockGuestVerifier::accepting("0417"));
    let context = anonymous_context(Arc::clone(&verifier));

    let mut flow = context.guest_flow();
    flow.begin(Action::Delete, "q7");
    flow.input_secret("0417").unwrap();
    flow.cancel();

    assert_eq!(flow.state(), FlowState::Idle);
    assert!(verifier.requests.lock().unwrap().is_empty());
}
