use super::*;
use futures::executor::block_on;
use std::cell::RefCell;

// =============================================================
// MockTransport
// =============================================================

struct MockTransport {
    outcome: Result<ChatReply, ApiError>,
    sent: RefCell<Vec<String>>,
}

impl MockTransport {
    fn replying(reply: Option<&str>) -> Self {
        Self { outcome: Ok(ChatReply { reply: reply.map(str::to_owned) }), sent: RefCell::new(Vec::new()) }
    }

    fn failing(err: ApiError) -> Self {
        Self { outcome: Err(err), sent: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl ChatTransport for MockTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, ApiError> {
        self.sent.borrow_mut().push(message.to_owned());
        self.outcome.clone()
    }
}

fn assistant_messages(state: &ChatState) -> Vec<&ChatMessage> {
    state
        .messages()
        .iter()
        .filter(|m| m.role == Role::Assistant)
        .collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages().is_empty());
    assert_eq!(state.send_state(), SendState::Idle);
    assert!(!state.is_open());
    assert!(!state.can_submit());
}

#[test]
fn with_samples_seeds_fixed_conversation() {
    let state = ChatState::with_samples();
    let ids: Vec<u64> = state.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(state.messages()[1].content, "What stack powers this site?");
}

#[test]
fn toggle_and_close_panel() {
    let mut state = ChatState::new();
    state.toggle_open();
    assert!(state.is_open());
    state.toggle_open();
    assert!(!state.is_open());
    state.toggle_open();
    state.close();
    assert!(!state.is_open());
}

// =============================================================
// submit: success paths
// =============================================================

#[test]
fn submit_success_replaces_placeholder_with_reply() {
    let mut state = ChatState::new();
    let transport = MockTransport::replying(Some("X"));
    state.set_input("What stack powers this site?");

    assert!(block_on(state.submit(&transport)));

    let msgs = state.messages();
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].role, Role::User);
    assert_eq!(msgs[0].content, "What stack powers this site?");
    let assistants = assistant_messages(&state);
    assert_eq!(assistants.len(), 1);
    assert_eq!(assistants[0].content, "X");
    assert!(!state.is_sending());
    assert_eq!(transport.sent.borrow().as_slice(), ["What stack powers this site?"]);
}

#[test]
fn submit_trims_input_and_clears_buffer() {
    let mut state = ChatState::new();
    let transport = MockTransport::replying(Some("ok"));
    state.set_input("  hello there \n");

    block_on(state.submit(&transport));

    assert_eq!(state.messages()[0].content, "hello there");
    assert_eq!(state.input(), "");
    assert_eq!(transport.sent.borrow()[0], "hello there");
}

#[test]
fn submit_empty_reply_uses_fallback() {
    for reply in [None, Some("")] {
        let mut state = ChatState::new();
        state.set_input("hi");
        block_on(state.submit(&MockTransport::replying(reply)));
        assert_eq!(state.messages()[1].content, EMPTY_REPLY_TEXT, "reply {reply:?}");
    }
}

#[test]
fn ids_increase_from_first_generated_id() {
    let mut state = ChatState::with_samples();
    let transport = MockTransport::replying(Some("a"));
    state.set_input("one");
    block_on(state.submit(&transport));
    state.set_input("two");
    block_on(state.submit(&transport));

    let ids: Vec<u64> = state.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 1000, 1001, 1002, 1003]);
}

// =============================================================
// submit: failure paths
// =============================================================

#[test]
fn submit_status_error_shows_generic_message() {
    let mut state = ChatState::new();
    state.set_input("hello");
    block_on(state.submit(&MockTransport::failing(ApiError::Status(500))));

    assert_eq!(state.messages()[1].content, ERROR_TEXT);
    assert!(!state.is_sending());
}

#[test]
fn submit_never_shows_error_detail() {
    let mut state = ChatState::new();
    state.set_input("hello");
    let detail = "network error: connection reset by peer";
    block_on(state.submit(&MockTransport::failing(ApiError::Network(detail.into()))));

    let content = &state.messages()[1].content;
    assert_eq!(content, ERROR_TEXT);
    assert!(!content.contains("connection reset"));
}

#[test]
fn submit_decode_error_shows_generic_message() {
    let mut state = ChatState::new();
    state.set_input("hello");
    block_on(state.submit(&MockTransport::failing(ApiError::Decode("eof".into()))));
    assert_eq!(state.messages()[1].content, ERROR_TEXT);
}

// =============================================================
// no-op guards
// =============================================================

#[test]
fn blank_input_is_noop() {
    let mut state = ChatState::new();
    let transport = MockTransport::replying(Some("x"));
    state.set_input("   \n\t");

    assert!(!block_on(state.submit(&transport)));
    assert!(state.messages().is_empty());
    assert_eq!(state.input(), "   \n\t");
    assert_eq!(transport.calls(), 0);
}

#[test]
fn submit_while_sending_is_noop() {
    let mut state = ChatState::new();
    state.set_input("first");
    let pending = state.begin_submit().unwrap();
    let len_before = state.messages().len();

    state.set_input("second");
    assert!(!state.can_submit());
    assert_eq!(state.begin_submit(), None);
    let transport = MockTransport::replying(Some("x"));
    assert!(!block_on(state.submit(&transport)));

    assert_eq!(state.messages().len(), len_before);
    assert_eq!(transport.calls(), 0);
    assert_eq!(state.input(), "second");
    assert_eq!(state.send_state(), SendState::Sending { placeholder_id: pending.placeholder_id });
}

// =============================================================
// begin_submit / resolve
// =============================================================

#[test]
fn begin_submit_appends_user_and_placeholder() {
    let mut state = ChatState::new();
    state.set_input("hi");
    let pending = state.begin_submit().unwrap();

    assert_eq!(pending.text, "hi");
    let msgs = state.messages();
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[1].id, pending.placeholder_id);
    assert_eq!(msgs[1].role, Role::Assistant);
    assert_eq!(msgs[1].content, PLACEHOLDER_TEXT);
    assert!(state.is_sending());
    assert_eq!(state.input(), "");
}

#[test]
fn resolve_ignores_stale_pending() {
    let mut state = ChatState::new();
    state.set_input("hi");
    let pending = state.begin_submit().unwrap();
    let stale = PendingSend { placeholder_id: pending.placeholder_id + 99, text: "hi".into() };

    assert!(!state.resolve(&stale, Ok(ChatReply { reply: Some("late".into()) })));
    assert!(state.is_sending());
    assert_eq!(state.messages()[1].content, PLACEHOLDER_TEXT);

    assert!(state.resolve(&pending, Ok(ChatReply { reply: Some("on time".into()) })));
    assert_eq!(state.messages()[1].content, "on time");
}

#[test]
fn resolve_twice_only_applies_once() {
    let mut state = ChatState::new();
    state.set_input("hi");
    let pending = state.begin_submit().unwrap();
    assert!(state.resolve(&pending, Ok(ChatReply { reply: Some("first".into()) })));
    assert!(!state.resolve(&pending, Err(ApiError::Status(500))));
    assert_eq!(state.messages()[1].content, "first");
}

#[test]
fn earlier_messages_are_untouched_by_resolve() {
    let mut state = ChatState::with_samples();
    let before: Vec<ChatMessage> = state.messages().to_vec();
    state.set_input("hi");
    block_on(state.submit(&MockTransport::replying(Some("ok"))));
    assert_eq!(&state.messages()[..3], before.as_slice());
}
