//! Domain value objects: Framework, Category, Feature.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO installation logic. What a feature contributes to a project
//! lives in the category installers; which features a category governs lives
//! in `catalog.rs`. This file defines the types, their identifiers, and their
//! `FromStr` parsers.
//!
//! # Adding a Feature
//!
//! 1. Add the variant to its category enum here
//! 2. Add the `as_str` arm, the `ALL` entry and the `FromStr` arm here
//! 3. Add the arm to the category installer's `match` (the compiler insists)

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Framework ─────────────────────────────────────────────────────────────────

/// The web framework the generated backend is built on.
///
/// Exactly one is chosen per project; each selects a different base template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    #[default]
    Hono,
    Express,
    BunNative,
}

impl Framework {
    pub const ALL: &'static [Framework] = &[Self::Hono, Self::Express, Self::BunNative];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hono => "hono",
            Self::Express => "express",
            Self::BunNative => "bun-native",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Hono => "Hono",
            Self::Express => "Express",
            Self::BunNative => "Bun Native",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hono" => Ok(Self::Hono),
            "express" => Ok(Self::Express),
            "bun-native" | "bun_native" | "bunnative" | "bun" => Ok(Self::BunNative),
            other => Err(DomainError::UnknownFramework {
                value: other.to_string(),
            }),
        }
    }
}

// ── Category ──────────────────────────────────────────────────────────────────

/// A functional grouping of features, handled by exactly one installer.
///
/// `Base` and `EnvFile` govern no features and always run; the variant order
/// below is the fixed execution order of the installer plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Base,
    Database,
    Auth,
    Ai,
    Email,
    Cloud,
    Realtime,
    Queue,
    #[serde(rename = "ratelimit")]
    RateLimit,
    Observability,
    Docs,
    Testing,
    Validation,
    EnvFile,
}

impl Category {
    /// Every category, in plan order.
    pub const ALL: &'static [Category] = &[
        Self::Base,
        Self::Database,
        Self::Auth,
        Self::Ai,
        Self::Email,
        Self::Cloud,
        Self::Realtime,
        Self::Queue,
        Self::RateLimit,
        Self::Observability,
        Self::Docs,
        Self::Testing,
        Self::Validation,
        Self::EnvFile,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Database => "database",
            Self::Auth => "auth",
            Self::Ai => "ai",
            Self::Email => "email",
            Self::Cloud => "cloud",
            Self::Realtime => "realtime",
            Self::Queue => "queue",
            Self::RateLimit => "ratelimit",
            Self::Observability => "observability",
            Self::Docs => "docs",
            Self::Testing => "testing",
            Self::Validation => "validation",
            Self::EnvFile => "env-file",
        }
    }

    /// Categories that run regardless of the feature selection.
    pub const fn is_unconditional(&self) -> bool {
        matches!(self, Self::Base | Self::EnvFile)
    }

    /// The features this category's installer handles.
    ///
    /// Delegates to `catalog::governed_features`.
    pub fn governed_features(self) -> &'static [Feature] {
        crate::domain::catalog::governed_features(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Feature ───────────────────────────────────────────────────────────────────

/// One optional capability a generated project may include, namespaced by
/// its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Database(DatabaseFeature),
    Auth(AuthFeature),
    Ai(AiFeature),
    Email(EmailFeature),
    Cloud(CloudFeature),
    Realtime(RealtimeFeature),
    Queue(QueueFeature),
    RateLimit(RateLimitFeature),
    Observability(ObservabilityFeature),
    Docs(DocsFeature),
    Testing(TestingFeature),
    Validation(ValidationFeature),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatabaseFeature {
    Postgres,
    Mysql,
    Sqlite,
    Mongodb,
    Redis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuthFeature {
    Jwt,
    OAuth,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AiFeature {
    OpenAi,
    Anthropic,
    Gemini,
    VercelAi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmailFeature {
    Resend,
    SendGrid,
    Nodemailer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CloudFeature {
    Aws,
    Gcp,
    Azure,
    CloudflareR2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RealtimeFeature {
    SocketIo,
    Sse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueueFeature {
    BullMq,
    Inngest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RateLimitFeature {
    Upstash,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObservabilityFeature {
    Sentry,
    Logtail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocsFeature {
    Swagger,
    Scalar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TestingFeature {
    Vitest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidationFeature {
    Zod,
    Yup,
}

impl Feature {
    /// The whole closed catalog, grouped by category in plan order.
    pub const ALL: &'static [Feature] = &[
        Self::Database(DatabaseFeature::Postgres),
        Self::Database(DatabaseFeature::Mysql),
        Self::Database(DatabaseFeature::Sqlite),
        Self::Database(DatabaseFeature::Mongodb),
        Self::Database(DatabaseFeature::Redis),
        Self::Auth(AuthFeature::Jwt),
        Self::Auth(AuthFeature::OAuth),
        Self::Auth(AuthFeature::Session),
        Self::Ai(AiFeature::OpenAi),
        Self::Ai(AiFeature::Anthropic),
        Self::Ai(AiFeature::Gemini),
        Self::Ai(AiFeature::VercelAi),
        Self::Email(EmailFeature::Resend),
        Self::Email(EmailFeature::SendGrid),
        Self::Email(EmailFeature::Nodemailer),
        Self::Cloud(CloudFeature::Aws),
        Self::Cloud(CloudFeature::Gcp),
        Self::Cloud(CloudFeature::Azure),
        Self::Cloud(CloudFeature::CloudflareR2),
        Self::Realtime(RealtimeFeature::SocketIo),
        Self::Realtime(RealtimeFeature::Sse),
        Self::Queue(QueueFeature::BullMq),
        Self::Queue(QueueFeature::Inngest),
        Self::RateLimit(RateLimitFeature::Upstash),
        Self::RateLimit(RateLimitFeature::Custom),
        Self::Observability(ObservabilityFeature::Sentry),
        Self::Observability(ObservabilityFeature::Logtail),
        Self::Docs(DocsFeature::Swagger),
        Self::Docs(DocsFeature::Scalar),
        Self::Testing(TestingFeature::Vitest),
        Self::Validation(ValidationFeature::Zod),
        Self::Validation(ValidationFeature::Yup),
    ];

    /// Stable catalog identifier, e.g. `postgres` or `vercel-ai`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Database(f) => match f {
                DatabaseFeature::Postgres => "postgres",
                DatabaseFeature::Mysql => "mysql",
                DatabaseFeature::Sqlite => "sqlite",
                DatabaseFeature::Mongodb => "mongodb",
                DatabaseFeature::Redis => "redis",
            },
            Self::Auth(f) => match f {
                AuthFeature::Jwt => "jwt",
                AuthFeature::OAuth => "oauth",
                AuthFeature::Session => "session",
            },
            Self::Ai(f) => match f {
                AiFeature::OpenAi => "openai",
                AiFeature::Anthropic => "anthropic",
                AiFeature::Gemini => "gemini",
                AiFeature::VercelAi => "vercel-ai",
            },
            Self::Email(f) => match f {
                EmailFeature::Resend => "resend",
                EmailFeature::SendGrid => "sendgrid",
                EmailFeature::Nodemailer => "nodemailer",
            },
            Self::Cloud(f) => match f {
                CloudFeature::Aws => "aws",
                CloudFeature::Gcp => "gcp",
                CloudFeature::Azure => "azure",
                CloudFeature::CloudflareR2 => "cloudflare-r2",
            },
            Self::Realtime(f) => match f {
                RealtimeFeature::SocketIo => "socketio",
                RealtimeFeature::Sse => "sse",
            },
            Self::Queue(f) => match f {
                QueueFeature::BullMq => "bullmq",
                QueueFeature::Inngest => "inngest",
            },
            Self::RateLimit(f) => match f {
                RateLimitFeature::Upstash => "upstash-ratelimit",
                RateLimitFeature::Custom => "custom-ratelimit",
            },
            Self::Observability(f) => match f {
                ObservabilityFeature::Sentry => "sentry",
                ObservabilityFeature::Logtail => "logtail",
            },
            Self::Docs(f) => match f {
                DocsFeature::Swagger => "swagger",
                DocsFeature::Scalar => "scalar",
            },
            Self::Testing(TestingFeature::Vitest) => "vitest",
            Self::Validation(f) => match f {
                ValidationFeature::Zod => "zod",
                ValidationFeature::Yup => "yup",
            },
        }
    }

    /// The category whose installer handles this feature.
    pub const fn category(&self) -> Category {
        match self {
            Self::Database(_) => Category::Database,
            Self::Auth(_) => Category::Auth,
            Self::Ai(_) => Category::Ai,
            Self::Email(_) => Category::Email,
            Self::Cloud(_) => Category::Cloud,
            Self::Realtime(_) => Category::Realtime,
            Self::Queue(_) => Category::Queue,
            Self::RateLimit(_) => Category::RateLimit,
            Self::Observability(_) => Category::Observability,
            Self::Docs(_) => Category::Docs,
            Self::Testing(_) => Category::Testing,
            Self::Validation(_) => Category::Validation,
        }
    }

    /// Name of the provider's template directory under its category.
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::RateLimit(RateLimitFeature::Upstash) => "upstash",
            Self::RateLimit(RateLimitFeature::Custom) => "custom",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = DomainError;

    /// Accepts catalog identifiers plus the camelCase flag spellings
    /// (`vercelAI`, `cloudflareR2`, `upstashRateLimit`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let feature = match normalized.as_str() {
            "postgres" | "postgresql" | "pg" => Self::Database(DatabaseFeature::Postgres),
            "mysql" => Self::Database(DatabaseFeature::Mysql),
            "sqlite" => Self::Database(DatabaseFeature::Sqlite),
            "mongodb" | "mongo" => Self::Database(DatabaseFeature::Mongodb),
            "redis" => Self::Database(DatabaseFeature::Redis),
            "jwt" => Self::Auth(AuthFeature::Jwt),
            "oauth" => Self::Auth(AuthFeature::OAuth),
            "session" => Self::Auth(AuthFeature::Session),
            "openai" => Self::Ai(AiFeature::OpenAi),
            "anthropic" => Self::Ai(AiFeature::Anthropic),
            "gemini" => Self::Ai(AiFeature::Gemini),
            "vercel-ai" | "vercelai" => Self::Ai(AiFeature::VercelAi),
            "resend" => Self::Email(EmailFeature::Resend),
            "sendgrid" => Self::Email(EmailFeature::SendGrid),
            "nodemailer" => Self::Email(EmailFeature::Nodemailer),
            "aws" => Self::Cloud(CloudFeature::Aws),
            "gcp" => Self::Cloud(CloudFeature::Gcp),
            "azure" => Self::Cloud(CloudFeature::Azure),
            "cloudflare-r2" | "cloudflarer2" | "r2" => Self::Cloud(CloudFeature::CloudflareR2),
            "socketio" | "socket.io" => Self::Realtime(RealtimeFeature::SocketIo),
            "sse" => Self::Realtime(RealtimeFeature::Sse),
            "bullmq" => Self::Queue(QueueFeature::BullMq),
            "inngest" => Self::Queue(QueueFeature::Inngest),
            "upstash-ratelimit" | "upstashratelimit" => {
                Self::RateLimit(RateLimitFeature::Upstash)
            }
            "custom-ratelimit" | "customratelimit" => Self::RateLimit(RateLimitFeature::Custom),
            "sentry" => Self::Observability(ObservabilityFeature::Sentry),
            "logtail" => Self::Observability(ObservabilityFeature::Logtail),
            "swagger" | "openapi" => Self::Docs(DocsFeature::Swagger),
            "scalar" => Self::Docs(DocsFeature::Scalar),
            "vitest" => Self::Testing(TestingFeature::Vitest),
            "zod" => Self::Validation(ValidationFeature::Zod),
            "yup" => Self::Validation(ValidationFeature::Yup),
            _ => {
                return Err(DomainError::UnknownFeature {
                    value: s.to_string(),
                });
            }
        };
        Ok(feature)
    }
}

impl Serialize for Feature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feature_round_trips_through_its_identifier() {
        for feature in Feature::ALL {
            assert_eq!(feature.as_str().parse::<Feature>().unwrap(), *feature);
        }
    }

    #[test]
    fn camel_case_flag_spellings_are_accepted() {
        assert_eq!(
            "vercelAI".parse::<Feature>().unwrap(),
            Feature::Ai(AiFeature::VercelAi)
        );
        assert_eq!(
            "cloudflareR2".parse::<Feature>().unwrap(),
            Feature::Cloud(CloudFeature::CloudflareR2)
        );
        assert_eq!(
            "upstashRateLimit".parse::<Feature>().unwrap(),
            Feature::RateLimit(RateLimitFeature::Upstash)
        );
    }

    #[test]
    fn unknown_feature_is_rejected() {
        assert!(matches!(
            "cassandra".parse::<Feature>(),
            Err(DomainError::UnknownFeature { .. })
        ));
    }

    #[test]
    fn ratelimit_providers_use_short_template_names() {
        assert_eq!(Feature::RateLimit(RateLimitFeature::Upstash).provider(), "upstash");
        assert_eq!(Feature::Database(DatabaseFeature::Postgres).provider(), "postgres");
    }

    #[test]
    fn framework_parses_aliases() {
        assert_eq!("Bun-Native".parse::<Framework>().unwrap(), Framework::BunNative);
        assert_eq!("bun".parse::<Framework>().unwrap(), Framework::BunNative);
        assert!("koa".parse::<Framework>().is_err());
    }

    #[test]
    fn only_base_and_env_file_are_unconditional() {
        let unconditional: Vec<_> = Category::ALL
            .iter()
            .filter(|c| c.is_unconditional())
            .collect();
        assert_eq!(unconditional, vec![&Category::Base, &Category::EnvFile]);
    }

    #[test]
    fn plan_order_starts_with_base_and_ends_with_env_file() {
        assert_eq!(Category::ALL.first(), Some(&Category::Base));
        assert_eq!(Category::ALL.last(), Some(&Category::EnvFile));
    }
}
