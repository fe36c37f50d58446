use crate::models::number_format::{fixed, plain};
use crate::{CourseModule, Definition, FieldSpec, FieldValues, Report, Result, Simulator};

const ID: &str = "module5";

pub(super) static MODULE: CourseModule = CourseModule {
    id: ID,
    title: "Module V: Mobile Commerce",
    summary: "Mobile computing, legal issues, and consumer protection",
    hours: 18,
    topics: &[
        "Mobile Computing",
        "M-Commerce",
        "Legal & Ethical Issues",
        "Privacy & Consumer Protection",
    ],
    definitions: &[
        Definition {
            term: "Mobile Commerce (M-Commerce)",
            definition: "Commercial transactions conducted through mobile devices like smartphones and tablets.",
        },
        Definition {
            term: "Mobile Computing",
            definition: "The use of portable computing devices that can connect to networks wirelessly for data access and processing.",
        },
        Definition {
            term: "Pervasive Computing",
            definition: "Computing environment where computing capabilities are embedded in everyday objects and environments.",
        },
        Definition {
            term: "Privacy in E-Commerce",
            definition: "Protection of personal information and browsing behavior of users in electronic transactions.",
        },
        Definition {
            term: "Intellectual Property Rights",
            definition: "Legal rights protecting creations of the mind, including copyrights, trademarks, and patents in digital commerce.",
        },
        Definition {
            term: "Consumer Protection",
            definition: "Legal and regulatory measures ensuring fair treatment and rights of consumers in electronic transactions.",
        },
    ],
    simulators: &[
        Simulator {
            id: "mcommerce",
            title: "M-Commerce Performance & Security Calculator",
            fields: &[
                FieldSpec::choice(
                    "deviceType",
                    "Primary Device Type",
                    &["Smartphone", "Tablet", "Smartwatch", "IoT Device"],
                ),
                FieldSpec::integer("userBase", "User Base"),
                FieldSpec::decimal("transactionVolume", "Monthly Transaction Volume (%)"),
                FieldSpec::decimal("fraudRate", "Fraud Rate (%)"),
            ],
            formula: mcommerce,
            module_id: ID,
        },
        Simulator {
            id: "compliance",
            title: "Legal Compliance & Consumer Protection",
            fields: &[
                FieldSpec::choice(
                    "privacyLevel",
                    "Privacy Protection Level",
                    &["Basic", "Standard", "Advanced", "Premium"],
                ),
                FieldSpec::decimal("complianceCost", "Annual Compliance Cost (₹)"),
                FieldSpec::decimal("violationPenalty", "Potential Violation Penalty (₹)"),
                FieldSpec::integer("consumerComplaints", "Consumer Complaints (per month)"),
                FieldSpec::decimal("resolutionTime", "Average Resolution Time (hours)"),
            ],
            formula: compliance,
            module_id: ID,
        },
    ],
};

/// Share of fraud losses spent on prevention.
const PREVENTION_SHARE: f64 = 0.3;

fn mcommerce(values: &FieldValues) -> Result<Report> {
    let device = values.choice("deviceType")?;
    let users = values.integer("userBase")?;
    let volume = values.decimal("transactionVolume")?;
    let fraud = values.decimal("fraudRate")?;

    // (conversion rate %, security risk %)
    let (conversion_rate, security_risk) = match device {
        "Smartphone" => (2.8, 25.0),
        "Tablet" => (4.2, 20.0),
        "Smartwatch" => (1.5, 15.0),
        _ => (1.0, 35.0),
    };

    let expected = users as f64 * volume * conversion_rate / 100.0;
    let fraud_loss = expected * fraud / 100.0;
    let net = expected - fraud_loss;
    let prevention_cost = fraud_loss * PREVENTION_SHARE;

    let expected_text = fixed(expected, 0);
    let loss_text = fixed(fraud_loss, 0);
    let net_text = fixed(net, 0);
    let conversion_text = plain(conversion_rate);

    Ok(Report::new()
        .metric("conversionRate", "Conversion Rate (%)", fixed(conversion_rate, 1))
        .metric("securityRisk", "Security Risk (%)", fixed(security_risk, 1))
        .metric(
            "expectedTransactions",
            "Expected Transactions",
            expected_text.as_str(),
        )
        .metric("fraudLoss", "Fraud Loss", loss_text.as_str())
        .metric("netTransactions", "Net Transactions", net_text.as_str())
        .metric(
            "fraudPreventionCost",
            "Fraud Prevention Cost (₹)",
            fixed(prevention_cost, 2),
        )
        .step(format!(
            "Device type analysis: {device} (Conversion rate: {conversion_text}%)"
        ))
        .step(format!(
            "Calculate expected transactions: {users} users × {}% × {conversion_text}% = {expected_text}",
            plain(volume)
        ))
        .step(format!(
            "Calculate fraud loss: {expected_text} × {}% = {loss_text} transactions",
            plain(fraud)
        ))
        .step(format!(
            "Net transactions: {expected_text} - {loss_text} = {net_text}"
        ))
        .step(format!(
            "Fraud prevention cost: {loss_text} × 30% = ₹{}",
            plain(prevention_cost)
        )))
}

/// Share of a potential penalty avoided by good compliance.
const AVOIDABLE_PENALTY_SHARE: f64 = 0.8;

fn compliance(values: &FieldValues) -> Result<Report> {
    let privacy = values.choice("privacyLevel")?;
    let cost = values.decimal("complianceCost")?;
    let penalty = values.decimal("violationPenalty")?;
    let complaints = values.integer("consumerComplaints")?;
    let resolution_hours = values.decimal("resolutionTime")?;

    let base: i64 = match privacy {
        "Premium" => 100,
        "Advanced" => 90,
        "Standard" => 70,
        _ => 40,
    };

    let resolution_adjustment: i64 = if resolution_hours <= 24.0 {
        10
    } else if resolution_hours <= 72.0 {
        5
    } else {
        -5
    };

    let complaint_adjustment: i64 = if complaints > 10 {
        -15
    } else if complaints > 5 {
        -10
    } else {
        0
    };

    let score = (base + resolution_adjustment + complaint_adjustment).clamp(0, 100);
    let risk = if score >= 85 {
        "Low Risk"
    } else if score >= 65 {
        "Medium Risk"
    } else {
        "High Risk"
    };

    let savings = penalty * AVOIDABLE_PENALTY_SHARE;
    let roi = (savings - cost) / cost * 100.0;
    let complaint_rate = complaints as f64 / 100.0;

    let score_text = fixed(score as f64, 1);
    let roi_text = fixed(roi, 1);

    Ok(Report::new()
        .metric("complianceScore", "Compliance Score", score_text.as_str())
        .metric("riskLevel", "Risk Level", risk)
        .metric("potentialSavings", "Potential Savings (₹)", fixed(savings, 2))
        .metric("roi", "Compliance ROI (%)", roi_text.as_str())
        .metric("complaintRate", "Complaint Rate", fixed(complaint_rate, 1))
        .step(format!(
            "Base compliance score: {privacy} privacy = {base} points"
        ))
        .step(format!(
            "Resolution time adjustment: {} hours = {resolution_adjustment:+} points",
            plain(resolution_hours)
        ))
        .step(format!(
            "Complaint impact: {complaints} complaints = {} points",
            signed_or_zero(complaint_adjustment)
        ))
        .step(format!("Final compliance score: {score_text}/100"))
        .step(format!(
            "Calculate ROI: ((₹{} - ₹{}) ÷ ₹{}) × 100 = {roi_text}%",
            plain(savings),
            plain(cost),
            plain(cost)
        )))
}

/// `-15`, `-10`, or a bare `0`.
fn signed_or_zero(points: i64) -> String {
    if points == 0 {
        points.to_string()
    } else {
        format!("{points:+}")
    }
}
