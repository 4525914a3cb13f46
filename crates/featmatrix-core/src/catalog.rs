//! The built-in KeyReply comparison.
//!
//! Support is declared as explicit lists of supported feature names per
//! company; every feature not listed is unsupported.

use crate::dataset::{ComparisonDataset, DatasetBuilder};
use crate::error::Result;
use crate::policy::VendorPolicy;
use crate::types::{CategoryId, CategoryInfo};

/// Name of the vendor company.
pub const VENDOR: &str = "KeyReply";

const PLATFORM_SUPPORT: &[&str] = &[
    "Multi-model",
    "Speed",
    "Multilingual Support",
    "Custom Training",
    "Live chat handover",
];

const CLOUD_SUPPORT: &[&str] = &[
    "Multi-model",
    "Integrations",
    "Multi-instance",
    "LLM Cost Optimization",
    "Multilingual Support",
    "Custom Training",
    "Analytics Dashboard",
    "Live chat handover",
];

const SOLUTION_SUPPORT: &[&str] = &[
    "Omni-channel",
    "Multi-modal",
    "Interactive UI",
    "Integrations",
    "Evaluations",
    "Multi-instance",
    "Speed",
    "Multilingual Support",
    "Analytics Dashboard",
    "A/B Testing",
    "Sentiment Analysis",
    "Live chat handover",
    "Outbound Communication",
    "Outreach Solutions",
];

/// Builds the KeyReply comparison dataset.
///
/// # Example
///
/// ```rust
/// let dataset = featmatrix_core::catalog::keyreply().unwrap();
/// assert_eq!(dataset.feature_count(), 19);
/// assert!(dataset.supports("platform", "OpenAI", "Multi-model").unwrap());
/// ```
pub fn keyreply() -> Result<ComparisonDataset> {
    let mut builder = taxonomy().vendor_policy(VendorPolicy::AlwaysSupports);

    for (category, support) in [
        (CategoryId::Platform, PLATFORM_SUPPORT),
        (CategoryId::Cloud, CLOUD_SUPPORT),
        (CategoryId::Solution, SOLUTION_SUPPORT),
    ] {
        let companies = CategoryInfo::default_for(category).examples;
        for company in companies {
            builder = builder.company(category, company, support.iter().copied());
        }
    }

    // Vendor answers come from the policy, not from stored support.
    builder
        .company(CategoryId::Vendor, VENDOR, Vec::<&str>::new())
        .build()
}

fn taxonomy() -> DatasetBuilder {
    DatasetBuilder::new()
        .feature_category(
            "Core Capabilities",
            [
                (
                    "Omni-channel",
                    "One bot to serve on Web, Mobile app, WhatsApp, Messenger",
                ),
                (
                    "Multi-modal",
                    "Combination of text, voice and video capabilities",
                ),
                (
                    "Multi-model",
                    "Bots that can be built on different LLM models",
                ),
                ("Interactive UI", "GenAI bots with interactive elements"),
                ("Integrations", "Low code integration with other platforms"),
            ],
        )
        .feature_category(
            "Advanced Features",
            [
                ("Evaluations", "Managing quality of LLM outputs"),
                (
                    "Multi-instance",
                    "Highly available Scalable infrastructure based on traffic volume",
                ),
                ("Speed", "Zero or Customisable delays for bot response"),
                ("LLM Cost Optimization", "Model selection based on use case"),
                ("Multilingual Support", "Support for multiple languages"),
                ("Custom Training", "Ability to train on custom data"),
            ],
        )
        .feature_category(
            "Analytics and Testing",
            [
                ("Analytics Dashboard", "Detailed analytics and insights"),
                ("A/B Testing", "Test different bot versions"),
                (
                    "Sentiment Analysis",
                    "Analyze user sentiment in conversations",
                ),
            ],
        )
        .feature_category(
            "Communication and Specialization",
            [
                (
                    "Live chat handover",
                    "Support for handling incoming customer queries and requests by humans",
                ),
                (
                    "Outbound Communication",
                    "Proactive outreach and messaging capabilities",
                ),
                (
                    "Outreach Solutions",
                    "Tools and features for campaign management and customer engagement",
                ),
                (
                    "Healthcare Expertise",
                    "Specialized knowledge and features for healthcare use cases",
                ),
            ],
        )
        .feature_category(
            "Security and Compliance",
            [(
                "Compliance & Security",
                "Meet industry standards for data protection",
            )],
        )
}
