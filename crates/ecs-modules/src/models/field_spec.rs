use serde::Serialize;

/// How a raw input string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "options")]
pub enum FieldKind {
    Decimal,
    Integer,
    Choice(&'static [&'static str]),
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "a decimal number",
            Self::Integer => "a whole number",
            Self::Choice(_) => "one of the listed options",
        }
    }
}

/// One input of a simulator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn decimal(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Decimal,
        }
    }

    pub const fn integer(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Integer,
        }
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Choice(options),
        }
    }
}
