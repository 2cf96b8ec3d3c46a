//! Avatar URL construction.

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/6.x/";
const AVATAR_OPTIONS: &str =
    "&mouth=smile,tongue,default,twinkle&eyes=happy,wink,surprised,default&style=circle";

/// Style whose URLs carry no option suffix.
pub const INITIALS_STYLE: &str = "initials";

/// Style used for randomly generated candidates.
pub const DEFAULT_AVATAR_STYLE: &str = "avataaars";

/// Seed substituted when none is available.
pub const FALLBACK_SEED: &str = "X";

/// Display URL for an avatar `(seed, style)` pair.
pub fn avatar_url(seed: &str, style: &str) -> String {
    let seed = if seed.is_empty() { FALLBACK_SEED } else { seed };
    let base_url = format!("{}{}/png?seed={}", AVATAR_BASE_URL, style, seed);
    if style == INITIALS_STYLE {
        base_url
    } else {
        format!("{}{}", base_url, AVATAR_OPTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_style_has_no_option_suffix() {
        assert_eq!(
            avatar_url("Alex", INITIALS_STYLE),
            "https://api.dicebear.com/6.x/initials/png?seed=Alex"
        );
    }

    #[test]
    fn test_other_styles_carry_the_option_suffix() {
        let url = avatar_url("k3v9x2", DEFAULT_AVATAR_STYLE);
        assert!(url.starts_with("https://api.dicebear.com/6.x/avataaars/png?seed=k3v9x2&"));
        assert!(url.ends_with(AVATAR_OPTIONS));
    }

    #[test]
    fn test_empty_seed_falls_back_to_x() {
        assert_eq!(
            avatar_url("", INITIALS_STYLE),
            avatar_url("X", INITIALS_STYLE)
        );
        assert_eq!(
            avatar_url("", DEFAULT_AVATAR_STYLE),
            avatar_url("X", DEFAULT_AVATAR_STYLE)
        );
    }
}
