//! Claims carried by API tokens.
//!
//! Issuers are not consistent about claim types: the role may arrive as `2`
//! or `"2"` and the subject as a number or a string. Both forms are accepted.
//! A role that is not a number is treated as absent rather than rejecting a
//! correctly signed token.

use serde::{Deserialize, Deserializer, Serialize};

/// Decoded API token. Claims other than these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, usually the user id.
    #[serde(default, deserialize_with = "subject")]
    pub sub: String,
    /// Role code of the subject, when the issuer includes it.
    #[serde(
        default,
        deserialize_with = "integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<i32>,
    #[serde(
        default,
        deserialize_with = "integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub iat: Option<i64>,
    #[serde(
        default,
        deserialize_with = "integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub exp: Option<i64>,
}

/// Claims of a request that passed the token guard, stored in request extensions.
#[derive(Debug, Clone)]
pub struct DecodedToken(pub Claims);

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

impl Scalar {
    fn as_integer(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            Scalar::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

fn subject<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
        Some(Scalar::Flag(b)) => b.to_string(),
        None => String::new(),
    })
}

fn integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .and_then(|value| value.as_integer())
        .and_then(|n| T::try_from(n).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_ignore_unknown_fields() {
        let json = r#"{"sub":"42","scope":["read"],"exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, None);
        assert_eq!(claims.exp, Some(9999999999));
    }

    #[test]
    fn test_claims_without_subject() {
        let claims: Claims = serde_json::from_str("{}").unwrap();
        assert!(claims.sub.is_empty());
        assert_eq!(claims.iat, None);
    }

    #[test]
    fn test_role_as_string() {
        let claims: Claims = serde_json::from_str(r#"{"sub":"42","role":"2"}"#).unwrap();
        assert_eq!(claims.role, Some(2));
    }

    #[test]
    fn test_numeric_subject() {
        let claims: Claims = serde_json::from_str(r#"{"sub":42,"role":1}"#).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, Some(1));
    }

    #[test]
    fn test_unusable_role_is_absent() {
        let claims: Claims =
            serde_json::from_str(r#"{"sub":"7","role":"petugas","iat":null}"#).unwrap();
        assert_eq!(claims.role, None);
        assert_eq!(claims.iat, None);

        let claims: Claims = serde_json::from_str(r#"{"role":99999999999}"#).unwrap();
        assert_eq!(claims.role, None);
    }

    #[test]
    fn test_float_timestamps() {
        let claims: Claims = serde_json::from_str(r#"{"iat":1700000000.0}"#).unwrap();
        assert_eq!(claims.iat, Some(1_700_000_000));
    }

    #[test]
    fn test_claims_serialize_skips_absent() {
        let claims = Claims {
            sub: "7".to_string(),
            role: None,
            iat: None,
            exp: Some(10),
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert_eq!(serialized, r#"{"sub":"7","exp":10}"#);
    }
}
