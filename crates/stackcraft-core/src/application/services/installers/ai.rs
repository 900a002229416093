use crate::application::services::installers::Installer;
use crate::domain::{AiFeature, Category, Contribution, EnvBlock, Feature, FeatureSelection};

pub struct AiInstaller;

impl Installer for AiInstaller {
    fn category(&self) -> Category {
        Category::Ai
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Ai(ai) => Some(contribution(*ai)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(ai: AiFeature) -> Contribution {
    let base = Contribution::new(Feature::Ai(ai));
    match ai {
        AiFeature::OpenAi => base.deps(&["openai"]).env(
            EnvBlock::new("OpenAI Configuration").var("OPENAI_API_KEY", "your-openai-api-key"),
        ),
        AiFeature::Anthropic => base.deps(&["@anthropic-ai/sdk"]).env(
            EnvBlock::new("Anthropic Configuration")
                .var("ANTHROPIC_API_KEY", "your-anthropic-api-key"),
        ),
        AiFeature::Gemini => base.deps(&["@google/generative-ai"]).env(
            EnvBlock::new("Google Gemini Configuration")
                .var("GEMINI_API_KEY", "your-gemini-api-key"),
        ),
        AiFeature::VercelAi => base.deps(&["ai"]).env(
            EnvBlock::new("Vercel AI SDK Configuration")
                .comment("Add API keys for the providers you want to use with Vercel AI"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_providers_copy_source_only() {
        for ai in [AiFeature::OpenAi, AiFeature::Anthropic, AiFeature::Gemini, AiFeature::VercelAi] {
            assert_eq!(contribution(ai).copy_mode, crate::domain::CopyMode::Source);
        }
    }

    #[test]
    fn vercel_block_declares_no_variables() {
        let env = contribution(AiFeature::VercelAi).env.unwrap();
        assert_eq!(env.keys().count(), 0);
    }
}
