//! The thesaurize slash command.

use serde::{Deserialize, Serialize};

use crate::rewrite::PhraseRewriter;

/// Name the command is registered under.
pub const COMMAND_NAME: &str = "thesaurize";

/// Name of the command's single required string option.
pub const MESSAGE_OPTION: &str = "message";

/// Incoming command invocation payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandRequest {
    /// The phrase to rewrite.
    pub message: String,
}

/// Reply sent back to the channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandReply {
    /// The rewritten phrase.
    pub content: String,
}

/// Handle one command invocation.
///
/// Always produces a reply; lookup failures degrade to the original words
/// inside the rewriter.
pub async fn handle_command(rewriter: &PhraseRewriter, request: CommandRequest) -> CommandReply {
    let content = rewriter.rewrite(&request.message).await;
    CommandReply { content }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::thesaurus::DictionaryThesaurus;

    #[test]
    fn test_command_reply_contains_rewritten_phrase() {
        let dictionary = DictionaryThesaurus::from_synonym_groups(vec![vec![
            "Hello".to_string(),
            "Greetings".to_string(),
        ]]);
        let rewriter = PhraseRewriter::new(Arc::new(dictionary));

        let reply = tokio_test::block_on(handle_command(
            &rewriter,
            CommandRequest {
                message: "Hello, world!".to_string(),
            },
        ));
        assert_eq!(reply.content, "Greetings, world!");
    }

    #[test]
    fn test_payloads_round_trip_as_json() {
        let request: CommandRequest =
            serde_json::from_str(r#"{"message": "Hello there"}"#).unwrap();
        assert_eq!(request.message, "Hello there");

        let reply = CommandReply {
            content: "Howdy there".to_string(),
        };
        let encoded = serde_json::to_string(&reply).unwrap();
        assert_eq!(encoded, r#"{"content":"Howdy there"}"#);
    }
}
