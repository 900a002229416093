use crate::application::services::installers::Installer;
use crate::domain::{Category, CloudFeature, Contribution, EnvBlock, Feature, FeatureSelection};

pub struct CloudInstaller;

impl Installer for CloudInstaller {
    fn category(&self) -> Category {
        Category::Cloud
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Cloud(cloud) => Some(contribution(*cloud)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(cloud: CloudFeature) -> Contribution {
    let base = Contribution::new(Feature::Cloud(cloud));
    match cloud {
        CloudFeature::Aws => base
            .deps(&["@aws-sdk/client-s3", "@aws-sdk/s3-request-presigner"])
            .env(
                EnvBlock::new("AWS Configuration")
                    .var("AWS_ACCESS_KEY_ID", "your-aws-access-key")
                    .var("AWS_SECRET_ACCESS_KEY", "your-aws-secret-key")
                    .var("AWS_REGION", "us-east-1")
                    .var("AWS_S3_BUCKET", "your-bucket-name"),
            ),
        CloudFeature::Gcp => base.deps(&["@google-cloud/storage"]).env(
            EnvBlock::new("Google Cloud Platform Configuration")
                .var("GCP_PROJECT_ID", "your-project-id")
                .var("GCP_BUCKET_NAME", "your-bucket-name")
                .comment("GCP_KEY_FILE=path/to/service-account-key.json"),
        ),
        CloudFeature::Azure => base.deps(&["@azure/storage-blob"]).env(
            EnvBlock::new("Azure Configuration")
                .var("AZURE_STORAGE_CONNECTION_STRING", "your-connection-string")
                .var("AZURE_STORAGE_CONTAINER", "your-container-name"),
        ),
        // R2 speaks the S3 API.
        CloudFeature::CloudflareR2 => base.deps(&["@aws-sdk/client-s3"]).env(
            EnvBlock::new("Cloudflare R2 Configuration")
                .var("CLOUDFLARE_ACCOUNT_ID", "your-account-id")
                .var("CLOUDFLARE_ACCESS_KEY_ID", "your-access-key")
                .var("CLOUDFLARE_SECRET_ACCESS_KEY", "your-secret-key")
                .var("CLOUDFLARE_R2_BUCKET", "your-bucket-name"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Framework;

    #[test]
    fn aws_and_r2_share_the_s3_client() {
        let selection = FeatureSelection::from_features(
            Framework::Hono,
            [Feature::Cloud(CloudFeature::Aws), Feature::Cloud(CloudFeature::CloudflareR2)],
        );
        let all = CloudInstaller.contributions(&selection);
        assert!(all.iter().all(|c| c.dependencies.contains(&"@aws-sdk/client-s3")));
    }
}
