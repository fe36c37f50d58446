use crate::models::number_format::{fixed, plain};
use crate::{CourseModule, Definition, FieldSpec, FieldValues, Report, Result, Simulator};

const ID: &str = "module3";

pub(super) static MODULE: CourseModule = CourseModule {
    id: ID,
    title: "Module III: E-Commerce Security",
    summary: "Security measures, threats, and protection strategies",
    hours: 18,
    topics: &[
        "Security Issues",
        "Threats & Attacks",
        "Security Management",
        "Communications Security",
    ],
    definitions: &[
        Definition {
            term: "E-Commerce Security",
            definition: "Protection of e-commerce transactions, websites, and data from unauthorized access and cyber threats.",
        },
        Definition {
            term: "Security Threats",
            definition: "Malware, phishing, SQL injection, DDoS attacks, identity theft, and data breaches.",
        },
        Definition {
            term: "Authentication",
            definition: "Process of verifying the identity of users, systems, or applications accessing e-commerce platforms.",
        },
        Definition {
            term: "Encryption",
            definition: "Converting data into coded form to prevent unauthorized access during transmission or storage.",
        },
        Definition {
            term: "SSL/TLS",
            definition: "Secure Socket Layer/Transport Layer Security protocols that provide secure communication over networks.",
        },
        Definition {
            term: "Digital Certificates",
            definition: "Electronic credentials that verify the authenticity of websites and secure communications.",
        },
    ],
    simulators: &[
        Simulator {
            id: "security",
            title: "Security Investment & Risk Calculator",
            fields: &[
                FieldSpec::choice("threatLevel", "Threat Level", &["Low", "Medium", "High"]),
                FieldSpec::decimal("securityBudget", "Security Budget (₹)"),
                FieldSpec::decimal("dataValue", "Data Value (₹)"),
                FieldSpec::integer("userCount", "Number of Users"),
            ],
            formula: security,
            module_id: ID,
        },
        Simulator {
            id: "threats",
            title: "Threat Assessment & Countermeasures",
            fields: &[
                FieldSpec::choice(
                    "attackType",
                    "Primary Attack Type",
                    &["Phishing", "SQL Injection", "DDoS", "Malware"],
                ),
                FieldSpec::choice(
                    "encryptionLevel",
                    "Encryption Level",
                    &["None", "AES-128", "AES-256"],
                ),
                FieldSpec::integer("vulnerabilities", "Known Vulnerabilities"),
            ],
            formula: threats,
            module_id: ID,
        },
    ],
};

/// Share of the data value worth spending on protection, per threat step.
const RECOMMENDED_BUDGET_SHARE: f64 = 0.05;

fn security(values: &FieldValues) -> Result<Report> {
    let threat_level = values.choice("threatLevel")?;
    let budget = values.decimal("securityBudget")?;
    let data_value = values.decimal("dataValue")?;
    let users = values.integer("userCount")?;

    let multiplier: u8 = match threat_level {
        "High" => 3,
        "Medium" => 2,
        _ => 1,
    };
    let budget_ratio = budget / data_value;
    let raw_score = budget_ratio * 100.0 / f64::from(multiplier);
    // Capped at 100; NaN passes through and lands in the lowest band.
    let score = if raw_score > 100.0 { 100.0 } else { raw_score };

    let (protection, risk) = if score >= 80.0 {
        ("Excellent Protection", "Low Risk")
    } else if score >= 60.0 {
        ("Good Protection", "Medium Risk")
    } else {
        ("Basic Protection", "High Risk")
    };

    let cost_per_user = budget / users as f64;
    let recommended_budget = data_value * RECOMMENDED_BUDGET_SHARE * f64::from(multiplier);

    let ratio_text = fixed(budget_ratio, 3);
    let score_text = fixed(score, 1);

    Ok(Report::new()
        .metric("securityScore", "Security Score", score_text.as_str())
        .metric("protectionLevel", "Protection Level", protection)
        .metric("riskLevel", "Risk Level", risk)
        .metric("costPerUser", "Cost per User (₹)", fixed(cost_per_user, 2))
        .metric(
            "recommendedBudget",
            "Recommended Budget (₹)",
            fixed(recommended_budget, 2),
        )
        .step(format!(
            "Assess threat level: {threat_level} (Multiplier: {multiplier})"
        ))
        .step(format!(
            "Calculate budget ratio: ₹{} ÷ ₹{} = {ratio_text}",
            plain(budget),
            plain(data_value)
        ))
        .step(format!(
            "Apply threat adjustment: {ratio_text} × 100 ÷ {multiplier} = {score_text}"
        ))
        .step(format!("Determine protection level: {protection}"))
        .step(format!(
            "Calculate cost per user: ₹{} ÷ {users} = ₹{}",
            plain(budget),
            plain(cost_per_user)
        )))
}

const POINTS_PER_VULNERABILITY: i64 = 5;

fn threats(values: &FieldValues) -> Result<Report> {
    let attack_type = values.choice("attackType")?;
    let encryption = values.choice("encryptionLevel")?;
    let vulnerabilities = values.integer("vulnerabilities")?;

    let (base, countermeasures): (i64, [&str; 3]) = match attack_type {
        "Phishing" => (
            30,
            [
                "User education",
                "Email filtering",
                "Multi-factor authentication",
            ],
        ),
        "SQL Injection" => (
            40,
            [
                "Input validation",
                "Parameterized queries",
                "Web application firewall",
            ],
        ),
        "DDoS" => (
            35,
            ["Traffic filtering", "Load balancing", "CDN implementation"],
        ),
        _ => (
            45,
            ["Antivirus software", "Regular updates", "Sandboxing"],
        ),
    };

    let reduction: i64 = match encryption {
        "AES-256" => 20,
        "AES-128" => 15,
        _ => 5,
    };

    let vulnerability_points = vulnerabilities.saturating_mul(POINTS_PER_VULNERABILITY);
    let threat_score = (base - reduction).saturating_add(vulnerability_points).max(0);
    let mitigation = 100 - threat_score;

    let score_text = fixed(threat_score as f64, 1);
    let mitigation_text = fixed(mitigation as f64, 1);

    let report = Report::new()
        .metric("threatScore", "Threat Score", score_text.as_str())
        .metric("riskMitigation", "Risk Mitigation (%)", mitigation_text.as_str())
        .metric(
            "encryptionReduction",
            "Encryption Reduction",
            reduction.to_string(),
        );

    Ok(countermeasures
        .iter()
        .fold(report, |report, measure| report.note(*measure))
        .step(format!(
            "Assess attack type impact: {attack_type} = {base} points"
        ))
        .step(format!(
            "Apply encryption protection: -{reduction} points for {encryption}"
        ))
        .step(format!(
            "Add vulnerability impact: {vulnerabilities} vulnerabilities × 5 = +{vulnerability_points} points"
        ))
        .step(format!("Calculate final threat score: {score_text}/100"))
        .step(format!(
            "Determine risk mitigation level: {mitigation_text}%"
        )))
}
