use crate::application::services::installers::Installer;
use crate::domain::{Category, Contribution, EnvBlock, Feature, FeatureSelection, RateLimitFeature};

pub struct RateLimitInstaller;

impl Installer for RateLimitInstaller {
    fn category(&self) -> Category {
        Category::RateLimit
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::RateLimit(limiter) => Some(contribution(*limiter)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(limiter: RateLimitFeature) -> Contribution {
    let base = Contribution::new(Feature::RateLimit(limiter)).with_config_files();
    match limiter {
        RateLimitFeature::Upstash => base
            .deps(&["@upstash/ratelimit", "@upstash/redis"])
            .env(
                EnvBlock::new("Upstash Rate Limit Configuration")
                    .var("UPSTASH_REDIS_REST_URL", "your-upstash-redis-rest-url")
                    .var("UPSTASH_REDIS_REST_TOKEN", "your-upstash-redis-rest-token"),
            ),
        // In-memory limiter shipped as source only.
        RateLimitFeature::Custom => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_use_short_provider_names() {
        assert_eq!(
            contribution(RateLimitFeature::Custom).template_dir(),
            "extras/ratelimit/custom"
        );
    }
}
