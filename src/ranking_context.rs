use serde::Deserialize;

// Knobs of the table model. Defaults are the usual three points for a win and one for a draw.
// A partial JSON file can override single fields, everything else falls back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingContext {
    pub points_for_win: u32,
    pub points_for_draw: u32,

    pub form_length: usize,         // How many of the latest results the form column keeps

    pub matches_per_matchday: usize, // Only used when numbering raw season rows
}

impl Default for RankingContext {
    fn default() -> Self {
        Self {
            points_for_win: 3,
            points_for_draw: 1,

            form_length: 5,

            matches_per_matchday: 8,
        }
    }
}

impl RankingContext {
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let ctx = RankingContext::from_json(r#"{ "formLength": 3 }"#).unwrap();
        assert_eq!(ctx.form_length, 3);
        assert_eq!(ctx.points_for_win, 3);
        assert_eq!(ctx.points_for_draw, 1);
        assert_eq!(ctx.matches_per_matchday, 8);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(RankingContext::from_json("{}").unwrap(), RankingContext::default());
    }
}
