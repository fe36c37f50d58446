use crate::models::number_format::{fixed, plain};
use crate::{CourseModule, Definition, FieldSpec, FieldValues, Report, Result, Simulator};

const ID: &str = "module2";

pub(super) static MODULE: CourseModule = CourseModule {
    id: ID,
    title: "Module II: E-Retailing & B2B",
    summary: "Online retail strategies and business-to-business commerce",
    hours: 18,
    topics: &[
        "Internet Marketing",
        "E-Tailing Models",
        "Web Advertising",
        "B2B Concepts & Models",
    ],
    definitions: &[
        Definition {
            term: "Internet Marketing",
            definition: "The practice of using internet-based digital technologies to promote and sell products or services.",
        },
        Definition {
            term: "E-Tailing (Electronic Retailing)",
            definition: "The sale of retail goods on the Internet, also known as online retail or e-commerce retail.",
        },
        Definition {
            term: "E-Tailing Models",
            definition: "Direct-to-consumer, marketplace model, subscription model, and drop-shipping model.",
        },
        Definition {
            term: "Web Advertising",
            definition: "Online advertising that uses the World Wide Web to deliver promotional messages to consumers.",
        },
        Definition {
            term: "B2B E-Commerce",
            definition: "Business-to-business electronic commerce involving transactions between businesses.",
        },
        Definition {
            term: "Auction Models",
            definition: "Forward auctions (sellers compete), reverse auctions (buyers compete), and double auctions.",
        },
    ],
    simulators: &[
        Simulator {
            id: "etailing",
            title: "E-Tailing Strategy & ROI Calculator",
            fields: &[
                FieldSpec::choice(
                    "products",
                    "Product Category",
                    &["Electronics", "Fashion", "Books", "Home & Garden"],
                ),
                FieldSpec::choice(
                    "targetAudience",
                    "Target Audience",
                    &["Young Adults", "Professionals", "Seniors"],
                ),
                FieldSpec::decimal("advertisingBudget", "Advertising Budget (₹)"),
                FieldSpec::decimal("conversionRate", "Expected Conversion Rate (%)"),
                FieldSpec::decimal("orderValue", "Average Order Value (₹)"),
            ],
            formula: etailing,
            module_id: ID,
        },
        Simulator {
            id: "b2b",
            title: "B2B Model Efficiency Calculator",
            fields: &[
                FieldSpec::integer("buyerCount", "Number of Buyers"),
                FieldSpec::integer("sellerCount", "Number of Sellers"),
                FieldSpec::choice(
                    "auctionType",
                    "Auction Type",
                    &["Forward", "Reverse", "Double"],
                ),
            ],
            formula: b2b,
            module_id: ID,
        },
    ],
};

/// Visitors bought per rupee of advertising.
const VISITORS_PER_RUPEE: f64 = 10.0;

fn etailing(values: &FieldValues) -> Result<Report> {
    let audience = values.choice("targetAudience")?;
    let budget = values.decimal("advertisingBudget")?;
    let conversion = values.decimal("conversionRate")? / 100.0;
    let order_value = values.decimal("orderValue")?;

    let traffic = budget * VISITORS_PER_RUPEE;
    let conversions = traffic * conversion;
    let revenue = conversions * order_value;
    let roi = (revenue - budget) / budget * 100.0;

    let strategy = match audience {
        "Young Adults" => "Social Media Marketing, Influencer Partnerships",
        "Professionals" => "LinkedIn Ads, Content Marketing",
        _ => "Search Engine Marketing, Display Advertising",
    };

    let traffic_text = fixed(traffic, 0);
    let conversions_text = fixed(conversions, 0);
    let budget_text = plain(budget);

    Ok(Report::new()
        .metric("strategy", "Recommended Strategy", strategy)
        .metric("estimatedTraffic", "Estimated Traffic", traffic_text.as_str())
        .metric(
            "expectedConversions",
            "Expected Conversions",
            conversions_text.as_str(),
        )
        .metric("projectedRevenue", "Projected Revenue (₹)", fixed(revenue, 2))
        .metric("roi", "ROI (%)", fixed(roi, 1))
        .step(format!("Set advertising budget: ₹{budget_text}"))
        .step(format!(
            "Calculate estimated traffic: ₹{budget_text} × 10 visitors/₹1 = {traffic_text} visitors"
        ))
        .step(format!(
            "Apply conversion rate: {traffic_text} × {}% = {conversions_text} conversions",
            fixed(conversion * 100.0, 1)
        ))
        .step(format!(
            "Calculate revenue: {conversions_text} × ₹{} = ₹{}",
            plain(order_value),
            plain(revenue)
        ))
        .step(format!(
            "Calculate ROI: ((₹{} - ₹{budget_text}) ÷ ₹{budget_text}) × 100 = {}%",
            plain(revenue),
            fixed(roi, 1)
        )))
}

fn b2b(values: &FieldValues) -> Result<Report> {
    let buyers = values.integer("buyerCount")?;
    let sellers = values.integer("sellerCount")?;
    let auction_type = values.choice("auctionType")?;

    let (b, s) = (buyers as f64, sellers as f64);
    let (model, efficiency, cost_reduction) = match auction_type {
        "Forward" => ("Sell-side B2B Model", s / b * 100.0, 15.0 + s * 2.0),
        "Reverse" => ("Buy-side B2B Model", b / s * 100.0, 20.0 + b * 1.5),
        _ => ("Exchange B2B Model", (b + s) / 2.0 * 10.0, 25.0 + (b + s)),
    };

    let efficiency = fixed(efficiency, 1);
    let cost_reduction = fixed(cost_reduction, 1);

    Ok(Report::new()
        .metric("model", "B2B Model", model)
        .metric("efficiency", "Efficiency Score (%)", efficiency.as_str())
        .metric("costReduction", "Cost Reduction (%)", cost_reduction.as_str())
        .metric(
            "totalParticipants",
            "Total Participants",
            buyers.saturating_add(sellers).to_string(),
        )
        .step(format!(
            "Identify participants: {buyers} buyers, {sellers} sellers"
        ))
        .step(format!("Determine auction type: {auction_type} Auction"))
        .step(format!("Select B2B model: {model}"))
        .step(format!("Calculate efficiency score: {efficiency}%"))
        .step(format!("Estimate cost reduction: {cost_reduction}%")))
}
