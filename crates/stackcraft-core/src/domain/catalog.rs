//! Static catalog of frameworks and feature categories.
//!
//! # Adding a Framework
//!
//! 1. Add a variant to `Framework` in `value_objects.rs`
//! 2. Add one [`FrameworkDef`] entry to [`FRAMEWORK_REGISTRY`]
//! 3. Ship its base template directory under `templates/`
//!
//! Categories are listed once in [`CATEGORY_REGISTRY`], in plan order. The
//! listing command and the plan builder both read from here.

use crate::domain::value_objects::{
    AiFeature, AuthFeature, Category, CloudFeature, DatabaseFeature, DocsFeature, EmailFeature,
    Feature, Framework, ObservabilityFeature, QueueFeature, RateLimitFeature, RealtimeFeature,
    TestingFeature, ValidationFeature,
};

// ── Framework definitions ────────────────────────────────────────────────────

/// Everything the core needs to know about one framework.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDef {
    pub framework: Framework,

    /// Base template directory, relative to the template root.
    pub template_dir: &'static str,

    /// Runtime packages the framework itself needs.
    pub dependencies: &'static [&'static str],

    /// Dev-only packages the framework itself needs.
    pub dev_dependencies: &'static [&'static str],

    /// Command that starts the dev server, shown in next steps.
    pub dev_command: &'static str,
}

pub static FRAMEWORK_REGISTRY: &[FrameworkDef] = &[
    FrameworkDef {
        framework: Framework::Hono,
        template_dir: "base",
        dependencies: &["hono"],
        dev_dependencies: &[],
        dev_command: "bun run dev",
    },
    FrameworkDef {
        framework: Framework::Express,
        template_dir: "base-express",
        dependencies: &["express"],
        dev_dependencies: &["@types/express"],
        dev_command: "bun run dev",
    },
    FrameworkDef {
        framework: Framework::BunNative,
        template_dir: "base-bun-native",
        dependencies: &[],
        dev_dependencies: &[],
        dev_command: "bun run dev",
    },
];

/// Look up the definition for `framework`.
///
/// Every variant has an entry; the fallback is never reached in practice.
pub fn framework_def(framework: Framework) -> &'static FrameworkDef {
    FRAMEWORK_REGISTRY
        .iter()
        .find(|def| def.framework == framework)
        .unwrap_or(&FRAMEWORK_REGISTRY[0])
}

// ── Category definitions ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub category: Category,

    /// Human-readable heading for listings and prompts.
    pub title: &'static str,

    /// Identifiers this category's installer handles. Empty for the
    /// unconditional categories.
    pub features: &'static [Feature],

    /// Whether the interactive flow offers a multi-select (true) or a single
    /// choice with a "none" option (false).
    pub multi_select: bool,
}

/// All categories in plan order.
pub static CATEGORY_REGISTRY: &[CategoryDef] = &[
    CategoryDef {
        category: Category::Base,
        title: "Base scaffold",
        features: &[],
        multi_select: false,
    },
    CategoryDef {
        category: Category::Database,
        title: "Database",
        features: &[
            Feature::Database(DatabaseFeature::Postgres),
            Feature::Database(DatabaseFeature::Mysql),
            Feature::Database(DatabaseFeature::Sqlite),
            Feature::Database(DatabaseFeature::Mongodb),
            Feature::Database(DatabaseFeature::Redis),
        ],
        multi_select: true,
    },
    CategoryDef {
        category: Category::Auth,
        title: "Authentication",
        features: &[
            Feature::Auth(AuthFeature::Jwt),
            Feature::Auth(AuthFeature::OAuth),
            Feature::Auth(AuthFeature::Session),
        ],
        multi_select: false,
    },
    CategoryDef {
        category: Category::Ai,
        title: "AI providers",
        features: &[
            Feature::Ai(AiFeature::OpenAi),
            Feature::Ai(AiFeature::Anthropic),
            Feature::Ai(AiFeature::Gemini),
            Feature::Ai(AiFeature::VercelAi),
        ],
        multi_select: true,
    },
    CategoryDef {
        category: Category::Email,
        title: "Email",
        features: &[
            Feature::Email(EmailFeature::Resend),
            Feature::Email(EmailFeature::SendGrid),
            Feature::Email(EmailFeature::Nodemailer),
        ],
        multi_select: false,
    },
    CategoryDef {
        category: Category::Cloud,
        title: "Cloud storage",
        features: &[
            Feature::Cloud(CloudFeature::Aws),
            Feature::Cloud(CloudFeature::Gcp),
            Feature::Cloud(CloudFeature::Azure),
            Feature::Cloud(CloudFeature::CloudflareR2),
        ],
        multi_select: true,
    },
    CategoryDef {
        category: Category::Realtime,
        title: "Realtime",
        features: &[
            Feature::Realtime(RealtimeFeature::SocketIo),
            Feature::Realtime(RealtimeFeature::Sse),
        ],
        multi_select: false,
    },
    CategoryDef {
        category: Category::Queue,
        title: "Background jobs",
        features: &[
            Feature::Queue(QueueFeature::BullMq),
            Feature::Queue(QueueFeature::Inngest),
        ],
        multi_select: false,
    },
    CategoryDef {
        category: Category::RateLimit,
        title: "Rate limiting",
        features: &[
            Feature::RateLimit(RateLimitFeature::Upstash),
            Feature::RateLimit(RateLimitFeature::Custom),
        ],
        multi_select: false,
    },
    CategoryDef {
        category: Category::Observability,
        title: "Observability",
        features: &[
            Feature::Observability(ObservabilityFeature::Sentry),
            Feature::Observability(ObservabilityFeature::Logtail),
        ],
        multi_select: true,
    },
    CategoryDef {
        category: Category::Docs,
        title: "API documentation",
        features: &[
            Feature::Docs(DocsFeature::Swagger),
            Feature::Docs(DocsFeature::Scalar),
        ],
        multi_select: false,
    },
    CategoryDef {
        category: Category::Testing,
        title: "Testing",
        features: &[Feature::Testing(TestingFeature::Vitest)],
        multi_select: false,
    },
    CategoryDef {
        category: Category::Validation,
        title: "Validation",
        features: &[
            Feature::Validation(ValidationFeature::Zod),
            Feature::Validation(ValidationFeature::Yup),
        ],
        multi_select: false,
    },
    CategoryDef {
        category: Category::EnvFile,
        title: "Environment files",
        features: &[],
        multi_select: false,
    },
];

pub fn category_def(category: Category) -> Option<&'static CategoryDef> {
    CATEGORY_REGISTRY.iter().find(|def| def.category == category)
}

pub fn governed_features(category: Category) -> &'static [Feature] {
    category_def(category).map_or(&[], |def| def.features)
}

/// Categories whose features a user can choose, in plan order.
pub fn selectable_categories() -> impl Iterator<Item = &'static CategoryDef> {
    CATEGORY_REGISTRY
        .iter()
        .filter(|def| !def.category.is_unconditional())
}
