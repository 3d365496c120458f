//! Pure operations over the chat transcript.
//!
//! The transcript is an ordered sequence of typed entries and the view
//! renders it as-is. Keeping the mutations here, free of signals and
//! DOM types, means they can be tested without a browser.

use crate::models::{AskResponse, ChatEntry};

/// Trims the raw input. `None` means the send is a no-op: no network
/// call and no transcript change.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Appends the user's question.
pub fn push_user(entries: &mut Vec<ChatEntry>, id: u64, text: String) {
    entries.push(ChatEntry::User { id, text });
}

/// Appends the "Thinking..." placeholder for an in-flight question.
pub fn push_pending(entries: &mut Vec<ChatEntry>, id: u64) {
    entries.push(ChatEntry::Pending { id });
}

/// Resolves a placeholder with an answer: the placeholder is removed
/// and the bot entry is appended at the end of the transcript.
pub fn resolve(entries: &mut Vec<ChatEntry>, pending_id: u64, response: AskResponse) {
    entries.retain(|entry| !matches!(*entry, ChatEntry::Pending { id } if id == pending_id));
    entries.push(ChatEntry::Bot {
        id: pending_id,
        text: response.answer,
        sources: response.sources,
    });
}

/// Marks a placeholder as failed **in place**: unlike `resolve`, the
/// entry keeps its position in the transcript.
pub fn fail(entries: &mut Vec<ChatEntry>, pending_id: u64, message: String) {
    let slot = entries
        .iter_mut()
        .find(|entry| matches!(**entry, ChatEntry::Pending { id } if id == pending_id));
    if let Some(entry) = slot {
        *entry = ChatEntry::Failed {
            id: pending_id,
            message,
        };
    }
}

/// "Sources: a, b" line for a bot entry; `None` when there is nothing
/// to cite.
pub fn format_sources(sources: &[String]) -> Option<String> {
    (!sources.is_empty()).then(|| format!("Sources: {}", sources.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AskResponse;

    fn answer(text: &str, sources: &[&str]) -> AskResponse {
        AskResponse {
            answer: text.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn whitespace_only_input_is_ignored() {
        assert_eq!(normalize_query("  "), None);
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("  Hello "), Some("Hello".to_string()));
    }

    #[test]
    fn send_appends_user_then_placeholder() {
        let mut entries = Vec::new();
        push_user(&mut entries, 0, "Hello".to_string());
        push_pending(&mut entries, 1);

        assert_eq!(
            entries,
            vec![
                ChatEntry::User {
                    id: 0,
                    text: "Hello".to_string()
                },
                ChatEntry::Pending { id: 1 },
            ]
        );
    }

    #[test]
    fn resolve_removes_placeholder_and_appends_answer() {
        let mut entries = Vec::new();
        push_user(&mut entries, 0, "Hello".to_string());
        push_pending(&mut entries, 1);

        resolve(&mut entries, 1, answer("Hi there", &["doc1.txt"]));

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[1],
            ChatEntry::Bot {
                id: 1,
                text: "Hi there".to_string(),
                sources: vec!["doc1.txt".to_string()],
            }
        );
    }

    #[test]
    fn failure_converts_placeholder_in_place() {
        let mut entries = Vec::new();
        push_user(&mut entries, 0, "A".to_string());
        push_pending(&mut entries, 1);
        push_user(&mut entries, 2, "B".to_string());

        fail(&mut entries, 1, "Error communicating with AI.".to_string());

        // The failed entry keeps the placeholder's position.
        assert_eq!(
            entries[1],
            ChatEntry::Failed {
                id: 1,
                message: "Error communicating with AI.".to_string(),
            }
        );
        assert_eq!(entries.len(), 3);
        assert!(matches!(entries[2], ChatEntry::User { id: 2, .. }));
    }

    #[test]
    fn interleaved_sends_resolve_independently() {
        let mut entries = Vec::new();
        push_user(&mut entries, 0, "A".to_string());
        push_pending(&mut entries, 1);
        push_user(&mut entries, 2, "B".to_string());
        push_pending(&mut entries, 3);

        // B's answer arrives first.
        resolve(&mut entries, 3, answer("answer B", &[]));
        resolve(&mut entries, 1, answer("answer A", &[]));

        let texts: Vec<_> = entries
            .iter()
            .map(|e| match e {
                ChatEntry::User { text, .. } => text.as_str(),
                ChatEntry::Bot { text, .. } => text.as_str(),
                other => panic!("unexpected entry {other:?}"),
            })
            .collect();
        assert_eq!(texts, vec!["A", "B", "answer B", "answer A"]);
    }

    #[test]
    fn sources_line_is_comma_joined() {
        let sources = vec!["doc1.txt".to_string(), "doc2.txt".to_string()];
        assert_eq!(
            format_sources(&sources),
            Some("Sources: doc1.txt, doc2.txt".to_string())
        );
        assert_eq!(format_sources(&[]), None);
    }
}
