use super::*;

#[test]
fn test_transcript_to_model_history() {
    let mut conv = Conversation::new();
    conv.push(ChatMessage::user("Hello"));
    conv.push(ChatMessage::assistant("Hello! Lovely to hear from you."));

    let messages: Vec<Message> = conv.history().iter().map(ChatMessage::to_message).collect();

    assert_eq!(messages.len(), 2);
    assert!(matches!(messages[0].role, Role::User));
    assert_eq!(messages[0].text(), Some("Hello"));
    assert!(matches!(messages[1].role, Role::Assistant));
}

#[test]
fn test_saved_transcript_round_trip() {
    let mut conv = Conversation::new();
    conv.push(ChatMessage::user("What do you think of this outfit?").with_image("https://example.com/fit.jpg"));
    conv.push(ChatMessage::error("I apologize, but I couldn't analyze that image: timeout"));

    let json = serde_json::to_string(conv.messages()).unwrap();
    let restored: Vec<ChatMessage> = serde_json::from_str(&json).unwrap();

    assert_eq!(Conversation::from_messages(restored), conv);
}

#[test]
fn test_profile_drives_style_key() {
    let profile = StyleProfile::new(vec!["streetwear".into()], vec![], "Your vibe: Streetwear");
    assert_eq!(StyleProfile::style_key(Some(&profile)), "streetwear");
    assert_eq!(StyleProfile::style_key(None), DEFAULT_STYLE);
}
