use crate::frailty::{ClinicalProfile, MobilityLevel, RiskAssessment, RiskTier};
use std::fmt;
use tracing::debug;

const SCORE_FIELD: &str = "frailty_score";
const RISK_FIELD: &str = "risk_level";
const MOBILITY_FIELD: &str = "mobility_level";
const CONDITIONS_FIELD: &str = "chronic_conditions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Equal,
}

impl Comparison {
    fn parse(operator: &str) -> Option<Self> {
        match operator {
            ">" => Some(Self::Greater),
            ">=" => Some(Self::GreaterOrEqual),
            "<" => Some(Self::Less),
            "<=" => Some(Self::LessOrEqual),
            "=" => Some(Self::Equal),
            _ => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Equal => "=",
        }
    }

    fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Greater => value > threshold,
            Self::GreaterOrEqual => value >= threshold,
            Self::Less => value < threshold,
            Self::LessOrEqual => value <= threshold,
            Self::Equal => value == threshold,
        }
    }
}

/// Parsed form of a single applicability criterion such as `risk_level = high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// A threshold that is only dots (e.g. `frailty_score > .`) is NaN and never holds.
    FrailtyScore {
        comparison: Comparison,
        threshold: f64,
    },
    /// `None` when the token is not a tier name; such a criterion never holds.
    RiskLevel(Option<RiskTier>),
    MobilityLevel(Option<MobilityLevel>),
    HasChronicConditions,
}

impl Predicate {
    /// Parses stored criterion text.
    ///
    /// Field keywords are found anywhere in the text and tried in a fixed order:
    /// score, tier, mobility, then condition presence. A keyword whose operator or
    /// value does not fit its grammar hands over to the next keyword.
    pub fn parse(criterion: &str) -> Option<Self> {
        if let Some(predicate) = parse_score(criterion) {
            return Some(predicate);
        }

        if let Some(token) = parse_equality_token(criterion, RISK_FIELD) {
            return Some(Self::RiskLevel(RiskTier::from_token(token)));
        }

        if let Some(token) = parse_equality_token(criterion, MOBILITY_FIELD) {
            return Some(Self::MobilityLevel(MobilityLevel::from_token(token)));
        }

        if criterion.contains(CONDITIONS_FIELD) {
            return Some(Self::HasChronicConditions);
        }

        None
    }

    pub fn evaluate(&self, assessment: &RiskAssessment, profile: &ClinicalProfile) -> bool {
        match self {
            Self::FrailtyScore {
                comparison,
                threshold,
            } => comparison.holds(assessment.frailty_score, *threshold),
            Self::RiskLevel(tier) => *tier == Some(assessment.risk_level),
            Self::MobilityLevel(level) => *level == Some(profile.mobility_level),
            Self::HasChronicConditions => profile.has_chronic_conditions(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrailtyScore {
                comparison,
                threshold,
            } => write!(f, "{SCORE_FIELD} {} {threshold}", comparison.symbol()),
            Self::RiskLevel(Some(tier)) => write!(f, "{RISK_FIELD} = {}", tier.token()),
            Self::RiskLevel(None) => write!(f, "{RISK_FIELD} = <unknown>"),
            Self::MobilityLevel(Some(level)) => {
                write!(f, "{MOBILITY_FIELD} = {}", level.token())
            }
            Self::MobilityLevel(None) => write!(f, "{MOBILITY_FIELD} = <unknown>"),
            Self::HasChronicConditions => f.write_str(CONDITIONS_FIELD),
        }
    }
}

/// Fail-closed evaluation of raw criterion text.
pub fn evaluate_criterion(
    criterion: &str,
    assessment: &RiskAssessment,
    profile: &ClinicalProfile,
) -> bool {
    match Predicate::parse(criterion) {
        Some(predicate) => predicate.evaluate(assessment, profile),
        None => {
            debug!(criterion, "applicability criterion not recognized");
            false
        }
    }
}

/// `frailty_score <ops> <decimal>`, taken at the first keyword occurrence that fits.
fn parse_score(criterion: &str) -> Option<Predicate> {
    let (operator, literal) = criterion
        .match_indices(SCORE_FIELD)
        .find_map(|(index, _)| {
            let rest = criterion[index + SCORE_FIELD.len()..].trim_start();
            let (operator, rest) = split_while(rest, |c| matches!(c, '<' | '>' | '='));
            if operator.is_empty() {
                return None;
            }
            let (literal, _) =
                split_while(rest.trim_start(), |c| c.is_ascii_digit() || c == '.');
            (!literal.is_empty()).then_some((operator, literal))
        })?;

    let comparison = Comparison::parse(operator)?;
    Some(Predicate::FrailtyScore {
        comparison,
        threshold: leading_decimal(literal),
    })
}

/// `<field> = <word>`, taken at the first keyword occurrence that fits.
fn parse_equality_token<'a>(criterion: &'a str, field: &str) -> Option<&'a str> {
    criterion.match_indices(field).find_map(|(index, _)| {
        let rest = criterion[index + field.len()..].trim_start();
        let rest = rest.strip_prefix('=')?.trim_start();
        let (token, _) = split_while(rest, |c| c.is_ascii_alphanumeric() || c == '_');
        (!token.is_empty()).then_some(token)
    })
}

fn split_while(text: &str, accept: impl Fn(char) -> bool) -> (&str, &str) {
    let end = text
        .char_indices()
        .find(|(_, c)| !accept(*c))
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Reads digits with at most one decimal point; anything after a second point is ignored.
fn leading_decimal(literal: &str) -> f64 {
    let end = literal
        .match_indices('.')
        .nth(1)
        .map(|(index, _)| index)
        .unwrap_or(literal.len());
    literal[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_score_operator() {
        for (text, comparison) in [
            ("frailty_score > 0.5", Comparison::Greater),
            ("frailty_score >= 0.5", Comparison::GreaterOrEqual),
            ("frailty_score < 0.5", Comparison::Less),
            ("frailty_score <= 0.5", Comparison::LessOrEqual),
            ("frailty_score=0.5", Comparison::Equal),
        ] {
            assert_eq!(
                Predicate::parse(text),
                Some(Predicate::FrailtyScore {
                    comparison,
                    threshold: 0.5
                }),
                "{text}"
            );
        }
    }

    #[test]
    fn unsupported_score_operator_falls_through() {
        assert_eq!(Predicate::parse("frailty_score => 0.5"), None);
        assert_eq!(
            Predicate::parse("frailty_score == 0.5 or chronic_conditions"),
            Some(Predicate::HasChronicConditions)
        );
    }

    #[test]
    fn score_literal_stops_at_second_point() {
        assert_eq!(leading_decimal("0.5.1"), 0.5);
        assert_eq!(leading_decimal(".25"), 0.25);
        assert!(leading_decimal(".").is_nan());
    }

    #[test]
    fn tier_and_mobility_tokens() {
        assert_eq!(
            Predicate::parse("risk_level = high"),
            Some(Predicate::RiskLevel(Some(RiskTier::High)))
        );
        assert_eq!(
            Predicate::parse("risk_level = severe"),
            Some(Predicate::RiskLevel(None))
        );
        assert_eq!(
            Predicate::parse("mobility_level=dependent"),
            Some(Predicate::MobilityLevel(Some(MobilityLevel::Dependent)))
        );
        assert_eq!(Predicate::parse("risk_level >= high"), None);
    }

    #[test]
    fn tokens_are_case_sensitive_whole_words() {
        assert_eq!(
            Predicate::parse("risk_level = High"),
            Some(Predicate::RiskLevel(None))
        );
        assert_eq!(
            Predicate::parse("risk_level = highest"),
            Some(Predicate::RiskLevel(None))
        );
    }

    #[test]
    fn unknown_fields_do_not_parse() {
        assert_eq!(Predicate::parse("age > 65"), None);
        assert_eq!(Predicate::parse(""), None);
    }

    #[test]
    fn display_renders_canonical_text() {
        let predicate = Predicate::parse("frailty_score>=0.65").expect("parses");
        assert_eq!(predicate.to_string(), "frailty_score >= 0.65");
        assert_eq!(
            Predicate::HasChronicConditions.to_string(),
            "chronic_conditions"
        );
    }
}
