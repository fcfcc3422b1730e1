//! Command implementations for the Thesaurize CLI.

use std::sync::Arc;

use crate::bot;
use crate::cli::args::*;
use crate::error::{Result, ThesaurizeError};
use crate::rewrite::PhraseRewriter;
use crate::thesaurus::{ApiNinjasThesaurus, DictionaryThesaurus, SynonymProvider};

/// Execute a CLI command.
pub async fn execute_command(args: ThesaurizeArgs) -> Result<()> {
    match &args.command {
        Command::Rewrite(rewrite_args) => rewrite_phrase(rewrite_args.clone(), &args).await,
        Command::Serve(serve_args) => serve(serve_args.clone(), &args).await,
    }
}

/// Rewrite one phrase and print it.
async fn rewrite_phrase(args: RewriteArgs, cli_args: &ThesaurizeArgs) -> Result<()> {
    let provider = build_provider(&args.provider)?;
    if cli_args.verbosity() > 1 {
        println!("Resolving synonyms via: {}", provider.name());
    }

    let rewriter = PhraseRewriter::new(provider);
    let rewritten = rewriter.rewrite(&args.message).await;
    println!("{rewritten}");

    Ok(())
}

/// Run the webhook server.
async fn serve(args: ServeArgs, cli_args: &ThesaurizeArgs) -> Result<()> {
    let provider = build_provider(&args.provider)?;
    if cli_args.verbosity() > 0 {
        println!(
            "Serving /{} on {}:{} (synonyms via: {})",
            bot::command::COMMAND_NAME,
            args.host,
            args.port,
            provider.name()
        );
        println!("Press Ctrl+C to exit");
    }

    let rewriter = Arc::new(PhraseRewriter::new(provider));
    bot::server::run_server(rewriter, args.host, args.port).await
}

/// Build the synonym provider from CLI/env configuration.
///
/// A dictionary file takes precedence over the API; having neither a
/// dictionary nor a credential is a fatal startup error.
fn build_provider(provider: &ProviderArgs) -> Result<Arc<dyn SynonymProvider>> {
    if let Some(path) = &provider.dictionary {
        let dictionary = DictionaryThesaurus::load_from_file(path)?;
        return Ok(Arc::new(dictionary));
    }

    match &provider.api_key {
        Some(api_key) => Ok(Arc::new(ApiNinjasThesaurus::new(api_key.clone())?)),
        None => Err(ThesaurizeError::config(
            "no synonym source configured: set API_TOKEN (or pass --api-key), or pass --dictionary",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_synonym_source_is_fatal() {
        let provider = ProviderArgs {
            api_key: None,
            dictionary: None,
        };

        let result = build_provider(&provider);
        match result {
            Err(ThesaurizeError::Config(_)) => {}
            _ => panic!("expected configuration error"),
        }
    }

    #[test]
    fn test_dictionary_takes_precedence_over_api_key() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[["big", "large"]]"#).unwrap();

        let provider = ProviderArgs {
            api_key: Some("secret".to_string()),
            dictionary: Some(file.path().to_path_buf()),
        };

        let provider = build_provider(&provider).unwrap();
        assert_eq!(provider.name(), "dictionary");
    }
}
