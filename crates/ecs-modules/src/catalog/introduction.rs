use crate::models::number_format::{fixed, plain};
use crate::{CourseModule, Definition, FieldSpec, FieldValues, Report, Result, Simulator};

const ID: &str = "module1";
const PARTIES: &[&str] = &["Business", "Consumer"];

pub(super) static MODULE: CourseModule = CourseModule {
    id: ID,
    title: "Module I: Introduction to E-Commerce",
    summary: "Fundamental concepts and frameworks of electronic commerce",
    hours: 18,
    topics: &[
        "EC Framework & Classification",
        "Business Models",
        "E-Marketplace",
        "Electronic Catalog & Auctions",
    ],
    definitions: &[
        Definition {
            term: "Electronic Commerce (E-Commerce)",
            definition: "The buying and selling of goods and services over electronic networks, primarily the internet.",
        },
        Definition {
            term: "EC Framework",
            definition: "A structured approach that includes people, public policies, marketing/advertising, support services, and business partnerships.",
        },
        Definition {
            term: "EC Business Models",
            definition: "B2B (Business-to-Business), B2C (Business-to-Consumer), C2C (Consumer-to-Consumer), C2B (Consumer-to-Business).",
        },
        Definition {
            term: "E-Marketplace",
            definition: "A virtual marketplace where buyers and sellers come together to conduct transactions electronically.",
        },
        Definition {
            term: "Electronic Catalog",
            definition: "A digital presentation of products or services with descriptions, images, and pricing information.",
        },
        Definition {
            term: "Electronic Auctions",
            definition: "Online bidding mechanisms where buyers compete to purchase goods or services.",
        },
    ],
    simulators: &[
        Simulator {
            id: "framework",
            title: "EC Framework & Business Model Analyzer",
            fields: &[
                FieldSpec::choice("businessType", "Business Type", PARTIES),
                FieldSpec::choice("customerSegment", "Customer Segment", PARTIES),
                FieldSpec::decimal("transactionValue", "Average Transaction Value (₹)"),
            ],
            formula: framework,
            module_id: ID,
        },
        Simulator {
            id: "marketplace",
            title: "E-Marketplace Analysis Tool",
            fields: &[FieldSpec::integer(
                "participants",
                "Number of Market Participants",
            )],
            formula: marketplace,
            module_id: ID,
        },
    ],
};

fn framework(values: &FieldValues) -> Result<Report> {
    let business_type = values.choice("businessType")?;
    let customer_segment = values.choice("customerSegment")?;
    let transaction_value = values.decimal("transactionValue")?;

    let (model, framework) = match (business_type, customer_segment) {
        ("Business", "Business") => (
            "B2B (Business-to-Business)",
            "Supply Chain Management, Procurement Systems, Electronic Data Interchange (EDI)",
        ),
        ("Business", "Consumer") => (
            "B2C (Business-to-Consumer)",
            "Online Retail, Digital Marketing, Customer Service Systems",
        ),
        ("Consumer", "Consumer") => (
            "C2C (Consumer-to-Consumer)",
            "Online Marketplaces, Peer-to-Peer Platforms, Trust Systems",
        ),
        _ => (
            "C2B (Consumer-to-Business)",
            "Reverse Auctions, Freelance Platforms, Review Systems",
        ),
    };

    let platform = if transaction_value < 1000.0 {
        "Micropayment Systems"
    } else if transaction_value < 10000.0 {
        "Standard E-Commerce Platform"
    } else {
        "Enterprise B2B Platform"
    };

    Ok(Report::new()
        .metric("model", "EC Model", model)
        .metric("framework", "Framework", framework)
        .metric("recommendedPlatform", "Recommended Platform", platform)
        .metric(
            "transactionSize",
            "Transaction Size",
            plain(transaction_value),
        )
        .step(format!(
            "Identify business participants: {business_type} → {customer_segment}"
        ))
        .step(format!("Determine EC Model: {model}"))
        .step(format!(
            "Analyze transaction value: ${}",
            plain(transaction_value)
        ))
        .step(format!("Select appropriate framework: {framework}"))
        .step(format!("Recommend platform: {platform}")))
}

fn marketplace(values: &FieldValues) -> Result<Report> {
    let participants = values.integer("participants")?;

    let (marketplace_type, intermediation, benefits) = if participants < 10 {
        (
            "Niche Marketplace",
            "High Touch - Personal Service",
            "Specialized expertise, personalized service",
        )
    } else if participants < 100 {
        (
            "Regional Marketplace",
            "Medium - Automated + Human",
            "Local market knowledge, moderate scale",
        )
    } else {
        (
            "Global Marketplace",
            "Low Touch - Highly Automated",
            "Large scale, cost efficiency, broad reach",
        )
    };

    let network_effect = fixed((participants as f64).powf(1.5), 0);

    Ok(Report::new()
        .metric("marketplaceType", "Marketplace Type", marketplace_type)
        .metric("intermediationLevel", "Intermediation Level", intermediation)
        .metric("networkEffect", "Network Effect Score", network_effect.as_str())
        .metric("benefits", "Key Benefits", benefits)
        .step(format!("Analyze participant count: {participants} participants"))
        .step(format!("Determine marketplace type: {marketplace_type}"))
        .step(format!(
            "Calculate network effect: {participants}^1.5 = {network_effect}"
        ))
        .step(format!("Define intermediation level: {intermediation}"))
        .step(format!("Identify key benefits: {benefits}")))
}
