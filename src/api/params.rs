use super::models::ParameterDescriptor;

const QUEUES: &[&str] = &["RANKED_SOLO_5x5", "RANKED_FLEX_SR", "RANKED_FLEX_TT"];
const TIERS: &[&str] = &[
    "BRONZE", "IRON", "SILVER", "GOLD", "PLATINUM", "EMERALD", "DIAMOND",
];
const DIVISIONS: &[&str] = &["I", "II", "III", "IV", "V"];
const GAMES: &[&str] = &["val", "lor"];

const KNOWN_PARAMETERS: &[ParameterDescriptor] = &[
    ParameterDescriptor {
        name: "puuid",
        description: "Unique player identifier across Riot games.",
        allowed_values: None,
    },
    ParameterDescriptor {
        name: "gameName",
        description: "In-game player name (the part before '#').",
        allowed_values: None,
    },
    ParameterDescriptor {
        name: "tagLine",
        description: "Player tag (the part after '#').",
        allowed_values: None,
    },
    ParameterDescriptor {
        name: "game",
        description: "Game to resolve the active shard for (e.g. 'val', 'lor').",
        allowed_values: Some(GAMES),
    },
    ParameterDescriptor {
        name: "queue",
        description: "Ranked queue type.",
        allowed_values: Some(QUEUES),
    },
    ParameterDescriptor {
        name: "tier",
        description: "Ranked tier (e.g. 'BRONZE', 'SILVER', 'GOLD').",
        allowed_values: Some(TIERS),
    },
    ParameterDescriptor {
        name: "division",
        description: "Division within a tier (e.g. 'I', 'II', 'III').",
        allowed_values: Some(DIVISIONS),
    },
    ParameterDescriptor {
        name: "leagueId",
        description: "League identifier.",
        allowed_values: None,
    },
    ParameterDescriptor {
        name: "encryptedSummonerId",
        description: "Encrypted summoner identifier.",
        allowed_values: None,
    },
    ParameterDescriptor {
        name: "matchId",
        description: "Match identifier, prefixed by platform (e.g. 'BR1_1234567890').",
        allowed_values: None,
    },
    ParameterDescriptor {
        name: "championId",
        description: "Numeric champion key.",
        allowed_values: None,
    },
    ParameterDescriptor {
        name: "teamId",
        description: "Clash team identifier.",
        allowed_values: None,
    },
    ParameterDescriptor {
        name: "tournamentId",
        description: "Clash tournament identifier.",
        allowed_values: None,
    },
];

/// Advisory metadata about parameters. Endpoints may declare parameters
/// that are not listed here.
#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    params: Vec<ParameterDescriptor>,
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        ParameterRegistry {
            params: KNOWN_PARAMETERS.to_vec(),
        }
    }
}

impl ParameterRegistry {
    pub fn new(params: Vec<ParameterDescriptor>) -> Self {
        ParameterRegistry { params }
    }

    pub fn describe(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }

    /// `None` when the parameter is unknown or unconstrained.
    pub fn allowed_values(&self, name: &str) -> Option<&'static [&'static str]> {
        self.describe(name)
            .and_then(|p| p.allowed_values)
            .filter(|values| !values.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.params.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_known_parameter() {
        let registry = ParameterRegistry::default();
        let queue = registry.describe("queue").unwrap();
        assert_eq!(queue.name, "queue");
        assert!(queue.allowed_values.unwrap().contains(&"RANKED_SOLO_5x5"));
    }

    #[test]
    fn unconstrained_parameter_has_no_allowed_values() {
        let registry = ParameterRegistry::default();
        assert!(registry.describe("puuid").is_some());
        assert_eq!(registry.allowed_values("puuid"), None);
    }

    #[test]
    fn unknown_parameter() {
        let registry = ParameterRegistry::default();
        assert!(registry.describe("region").is_none());
        assert_eq!(registry.allowed_values("region"), None);
    }

    #[test]
    fn empty_value_set_counts_as_unconstrained() {
        let registry = ParameterRegistry::new(vec![ParameterDescriptor {
            name: "mode",
            description: "",
            allowed_values: Some(&[]),
        }]);
        assert_eq!(registry.allowed_values("mode"), None);
    }
}
