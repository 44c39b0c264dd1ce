//! Analyze command implementation

use anyhow::Result;
use tracing::error;

use crate::cli::{render, validate_input};
use crate::config::OutputFormat;
use crate::content::{AnalyzedContent, ContentKind};
use crate::synth::{lexicon, ContentSynthesizer, RandomSource};

pub struct AnalyzeOptions {
    pub kind: ContentKind,
    pub format: OutputFormat,
    pub explain: bool,
}

pub async fn run<R: RandomSource + ?Sized>(
    synthesizer: &ContentSynthesizer,
    rng: &mut R,
    raw: &str,
    options: &AnalyzeOptions,
) -> Result<AnalyzedContent> {
    let content = validate_input(raw)?;

    if options.format == OutputFormat::Text {
        println!("🔎 Analyzing {} content...", options.kind);
    }

    let record = match synthesizer.synthesize(content, options.kind, rng).await {
        Ok(record) => record,
        Err(e) => {
            error!(error = %e, "analysis failed");
            println!("Analysis failed: There was an error analyzing your content. Please try again.");
            return Err(e.into());
        }
    };

    match options.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Text => {
            print!("{}", render::report(&record));
            if options.explain {
                println!("\n{}", render::explain(&lexicon::scan(record.content())));
            }
            println!("\n{}", render::notice(&record));
        }
    }

    Ok(record)
}
