use crate::application::services::installers::Installer;
use crate::domain::{Category, Contribution, EmailFeature, EnvBlock, Feature, FeatureSelection};

pub struct EmailInstaller;

impl Installer for EmailInstaller {
    fn category(&self) -> Category {
        Category::Email
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Email(email) => Some(contribution(*email)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(email: EmailFeature) -> Contribution {
    let base = Contribution::new(Feature::Email(email));
    match email {
        EmailFeature::Resend => base.deps(&["resend"]).env(
            EnvBlock::new("Resend Configuration").var("RESEND_API_KEY", "your-resend-api-key"),
        ),
        EmailFeature::SendGrid => base.deps(&["@sendgrid/mail"]).env(
            EnvBlock::new("SendGrid Configuration")
                .var("SENDGRID_API_KEY", "your-sendgrid-api-key")
                .var("SENDGRID_FROM_EMAIL", "noreply@yourdomain.com"),
        ),
        EmailFeature::Nodemailer => base
            .deps(&["nodemailer"])
            .dev_deps(&["@types/nodemailer"])
            .env(
                EnvBlock::new("Nodemailer Configuration")
                    .var("SMTP_HOST", "smtp.example.com")
                    .var("SMTP_PORT", "587")
                    .var("SMTP_USER", "your-smtp-username")
                    .var("SMTP_PASS", "your-smtp-password")
                    .var("SMTP_FROM", "noreply@yourdomain.com"),
            ),
    }
}
