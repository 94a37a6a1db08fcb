use serde::{Deserialize, Serialize};

/// One persisted slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    StyleProfile,
    Credential,
    Onboarding,
    ChatHistory,
}

impl StateKey {
    pub const ALL: [StateKey; 4] = [
        StateKey::StyleProfile,
        StateKey::Credential,
        StateKey::Onboarding,
        StateKey::ChatHistory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::StyleProfile => "style_profile",
            StateKey::Credential => "credential",
            StateKey::Onboarding => "onboarding",
            StateKey::ChatHistory => "chat_history",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Whether the slot holds a secret
    pub fn is_sensitive(&self) -> bool {
        matches!(self, StateKey::Credential)
    }
}

/// API key for the chat completion endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub api_key: String,
}

impl Credential {
    /// Trimmed key, or `None` when nothing usable remains
    pub fn new(api_key: impl AsRef<str>) -> Option<Self> {
        let api_key = api_key.as_ref().trim();
        (!api_key.is_empty()).then(|| Self {
            api_key: api_key.to_string(),
        })
    }

    /// Key with everything but the last four characters hidden
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        let visible = chars.len().min(4);
        let tail: String = chars[chars.len() - visible..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - visible), tail)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &self.masked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_trims_and_rejects_blank() {
        assert!(Credential::new("   ").is_none());
        assert_eq!(Credential::new(" sk-123 ").unwrap().api_key, "sk-123");
    }

    #[test]
    fn test_masked() {
        let credential = Credential::new("sk-abcdef").unwrap();
        assert_eq!(credential.masked(), "*****cdef");
        assert_eq!(Credential::new("abc").unwrap().masked(), "abc");
        assert!(!format!("{:?}", credential).contains("sk-ab"));
    }

    #[test]
    fn test_file_names() {
        let names: Vec<String> = StateKey::ALL.iter().map(StateKey::file_name).collect();
        assert_eq!(
            names,
            vec!["style_profile.json", "credential.json", "onboarding.json", "chat_history.json"]
        );
    }
}
