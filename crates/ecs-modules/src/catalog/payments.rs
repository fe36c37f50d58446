use crate::models::number_format::{fixed, plain};
use crate::{CourseModule, Definition, FieldSpec, FieldValues, Report, Result, Simulator};

const ID: &str = "module4";

pub(super) static MODULE: CourseModule = CourseModule {
    id: ID,
    title: "Module IV: Electronic Payment Systems",
    summary: "Digital payment methods and transaction processing",
    hours: 18,
    topics: &[
        "Payment Cards",
        "Smart Cards",
        "E-Micropayments",
        "E-Checking & Bill Payment",
    ],
    definitions: &[
        Definition {
            term: "Electronic Payment Systems",
            definition: "Digital methods for conducting financial transactions over electronic networks.",
        },
        Definition {
            term: "Payment Cards",
            definition: "Credit cards, debit cards, and prepaid cards used for online transactions with magnetic stripe or chip technology.",
        },
        Definition {
            term: "Smart Cards",
            definition: "Payment cards with embedded microprocessors that can store and process data securely.",
        },
        Definition {
            term: "E-Micropayments",
            definition: "Small-value electronic transactions, typically under $10, used for digital content purchases.",
        },
        Definition {
            term: "E-Checking",
            definition: "Electronic version of traditional paper checks using digital signatures and online processing.",
        },
        Definition {
            term: "Electronic Bill Payment",
            definition: "Automated system for paying bills electronically through online banking or payment services.",
        },
    ],
    simulators: &[
        Simulator {
            id: "payment",
            title: "Payment Transaction Cost Calculator",
            fields: &[
                FieldSpec::choice(
                    "paymentMethod",
                    "Payment Method",
                    &["Credit Card", "Smart Card", "E-Check", "Digital Wallet"],
                ),
                FieldSpec::decimal("transactionAmount", "Transaction Amount"),
                FieldSpec::choice("currency", "Currency", &["INR", "USD", "EUR"]),
                FieldSpec::decimal("processingFee", "Processing Fee (₹)"),
            ],
            formula: payment,
            module_id: ID,
        },
        Simulator {
            id: "micropayment",
            title: "Micropayment Economics Calculator",
            fields: &[
                FieldSpec::integer("micropaymentCount", "Number of Micropayments"),
                FieldSpec::decimal("micropaymentValue", "Value per Micropayment (₹)"),
            ],
            formula: micropayment,
            module_id: ID,
        },
    ],
};

struct MethodProfile {
    security: &'static str,
    speed: &'static str,
    risk: &'static str,
}

fn method_profile(method: &str) -> MethodProfile {
    match method {
        "Credit Card" => MethodProfile {
            security: "High (PCI DSS Compliance)",
            speed: "2-3 seconds",
            risk: "Medium (Chargeback risk)",
        },
        "Smart Card" => MethodProfile {
            security: "Very High (Chip + PIN)",
            speed: "1-2 seconds",
            risk: "Low (Enhanced authentication)",
        },
        "E-Check" => MethodProfile {
            security: "Medium (Digital signature)",
            speed: "1-3 business days",
            risk: "Low (Bank verification)",
        },
        _ => MethodProfile {
            security: "High (Tokenization)",
            speed: "1-2 seconds",
            risk: "Medium (Account security dependent)",
        },
    }
}

fn payment(values: &FieldValues) -> Result<Report> {
    let method = values.choice("paymentMethod")?;
    let amount = values.decimal("transactionAmount")?;
    // Validated for the form; the figures are always shown in rupees.
    values.choice("currency")?;
    let fee = values.decimal("processingFee")?;

    let total = amount + fee;
    let fee_percentage = fee / amount * 100.0;
    let profile = method_profile(method);

    let total_text = fixed(total, 2);
    let percentage_text = fixed(fee_percentage, 2);
    let (amount_text, fee_text) = (plain(amount), plain(fee));

    Ok(Report::new()
        .metric("totalCost", "Total Cost", total_text.as_str())
        .metric("feePercentage", "Fee Percentage (%)", percentage_text.as_str())
        .metric("securityLevel", "Security Level", profile.security)
        .metric("processingSpeed", "Processing Speed", profile.speed)
        .metric("riskFactor", "Risk Factor", profile.risk)
        .step(format!("Transaction amount: ₹{amount_text}"))
        .step(format!("Processing fee: ₹{fee_text}"))
        .step(format!(
            "Calculate total cost: ₹{amount_text} + ₹{fee_text} = ₹{total_text}"
        ))
        .step(format!(
            "Calculate fee percentage: (₹{fee_text} ÷ ₹{amount_text}) × 100 = {percentage_text}%"
        ))
        .step(format!(
            "Assess payment method: {method} - {}",
            profile.security
        )))
}

/// Percentage fee of a standard card processor.
const STANDARD_RATE: f64 = 0.029;
/// Flat per-transaction fee of a standard card processor, in rupees.
const STANDARD_FLAT_FEE: f64 = 25.0;
const MICROPAYMENT_RATE: f64 = 0.05;

fn micropayment(values: &FieldValues) -> Result<Report> {
    let count = values.integer("micropaymentCount")?;
    let value = values.decimal("micropaymentValue")?;

    let count_f = count as f64;
    let total = count_f * value;
    let standard_fee = total * STANDARD_RATE + count_f * STANDARD_FLAT_FEE;
    let micro_fee = total * MICROPAYMENT_RATE;
    let savings = standard_fee - micro_fee;
    let savings_percentage = savings / standard_fee * 100.0;

    let recommendation = if value <= 80.0 {
        "Use aggregated micropayment system"
    } else if value <= 400.0 {
        "Standard micropayment processing"
    } else {
        "Consider regular payment processing"
    };

    let total_text = fixed(total, 2);
    let standard_text = fixed(standard_fee, 2);
    let micro_text = fixed(micro_fee, 2);
    let savings_text = fixed(savings, 2);
    let percentage_text = fixed(savings_percentage, 1);

    Ok(Report::new()
        .metric("totalValue", "Total Value (₹)", total_text.as_str())
        .metric("standardFee", "Standard Processing Fee (₹)", standard_text.as_str())
        .metric("micropaymentFee", "Micropayment Fee (₹)", micro_text.as_str())
        .metric("savings", "Savings (₹)", savings_text.as_str())
        .metric("savingsPercentage", "Savings (%)", percentage_text.as_str())
        .metric("recommendation", "Recommendation", recommendation)
        .step(format!(
            "Calculate total value: {count} × ₹{} = ₹{total_text}",
            plain(value)
        ))
        .step(format!(
            "Standard processing fee: ₹{total_text} × 2.9% + {count} × ₹25 = ₹{standard_text}"
        ))
        .step(format!(
            "Micropayment processing fee: ₹{total_text} × 5% = ₹{micro_text}"
        ))
        .step(format!(
            "Calculate savings: ₹{standard_text} - ₹{micro_text} = ₹{savings_text}"
        ))
        .step(format!(
            "Savings percentage: (₹{savings_text} ÷ ₹{standard_text}) × 100 = {percentage_text}%"
        )))
}
