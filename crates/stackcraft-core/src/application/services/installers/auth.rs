use crate::application::services::installers::Installer;
use crate::domain::{AuthFeature, Category, Contribution, EnvBlock, Feature, FeatureSelection};

pub struct AuthInstaller;

impl Installer for AuthInstaller {
    fn category(&self) -> Category {
        Category::Auth
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Auth(auth) => Some(contribution(*auth)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(auth: AuthFeature) -> Contribution {
    let base = Contribution::new(Feature::Auth(auth)).with_config_files();
    match auth {
        AuthFeature::Jwt => base
            .deps(&["jsonwebtoken", "bcryptjs"])
            .dev_deps(&["@types/jsonwebtoken", "@types/bcryptjs"])
            .env(
                EnvBlock::new("JWT Authentication")
                    .var("JWT_SECRET", "your-super-secret-jwt-key-change-this")
                    .var("JWT_EXPIRES_IN", "7d"),
            ),
        AuthFeature::OAuth => base
            .deps(&["passport", "passport-oauth2"])
            .dev_deps(&["@types/passport"])
            .env(
                EnvBlock::new("OAuth Configuration")
                    .var("OAUTH_CLIENT_ID", "your-client-id")
                    .var("OAUTH_CLIENT_SECRET", "your-client-secret")
                    .var("OAUTH_CALLBACK_URL", "http://localhost:3000/auth/callback"),
            ),
        AuthFeature::Session => base.env(
            EnvBlock::new("Session Configuration")
                .var("SESSION_SECRET", "your-super-secret-session-key-change-this"),
        ),
    }
}
