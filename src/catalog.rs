//! Default agent catalog and catalog lookups.

use crate::model::{BrandedName, PestControlAgent};

/// Find a catalog entry by scientific name.
///
/// Linear search: catalogs hold on the order of a dozen entries.
pub fn find_agent<'a>(
    agents: &'a [PestControlAgent],
    scientific_name: &str,
) -> Option<&'a PestControlAgent> {
    agents
        .iter()
        .find(|agent| agent.scientific_name == scientific_name)
}

fn agent(
    scientific_name: &str,
    branded_names: &[&str],
    population_per_unit: u64,
    price_per_unit: f64,
    method: &str,
) -> PestControlAgent {
    PestControlAgent {
        scientific_name: scientific_name.to_string(),
        branded_names: branded_names
            .iter()
            .map(|name| BrandedName {
                name: name.to_string(),
                supplier: None,
            })
            .collect(),
        population_per_unit,
        price_per_unit,
        method: Some(method.to_string()),
    }
}

/// The catalog a new plan is seeded with.
pub fn default_agents() -> Vec<PestControlAgent> {
    vec![
        agent(
            "Aphidius Colemani",
            &["Aphipar", "Aphidius-System"],
            1000,
            45.0,
            "Endoparasitism. Lays eggs inside aphids, larva consumes the aphid \
             from the inside out, forming a 'mummy'. Adult wasp emerges to \
             parasitize more aphids.",
        ),
        agent(
            "Chrysoperla Carnea",
            &["Chrysopa", "Chrysopa-System"],
            100_000,
            225.0,
            "Predation. Larvae are voracious predators, using large mandibles \
             to pierce and suck body fluids from soft-bodied pests like aphids, \
             mealybugs, thrips, and spider mites.",
        ),
        agent(
            "Phytoseiulus Persimilis",
            &["Spidex", "Phytoseiulus-System"],
            10_000,
            300.0,
            "Predation. Specialist predator of spider mites, actively hunting \
             and consuming all life stages. They pierce the mites and suck out \
             their contents.",
        ),
        agent(
            "Dalotia Coriaria",
            &["Atheta", "Atheta-System"],
            5000,
            50.0,
            "Predation. Generalist predator in both larval and adult stages, \
             actively hunting soil-dwelling pests like fungus gnat larvae, \
             thrips pupae, and shore fly larvae.",
        ),
        agent(
            "Neoseiulus Cucumeris",
            &["Thripx", "ABS-System"],
            50_000,
            30.0,
            "Predation. Primarily feeds on young thrips larvae, also consumes \
             pollen and may feed on other small arthropods like spider mites.",
        ),
        agent(
            "Orius Insideous",
            &["Thripor", "Orius-System"],
            1000,
            60.0,
            "Predation. Generalist predator feeding on thrips, aphids, spider \
             mites, and whiteflies. Uses piercing-sucking mouthparts to \
             paralyze prey and suck out liquefied contents.",
        ),
        agent(
            "Steinernema Feltiae",
            &["Entonem", "NemaFence® Felti"],
            50_000_000,
            30.0,
            "Entomopathogenic Nematode (Parasitism). Enters host insects, \
             releases symbiotic bacteria that kill the host. Nematodes feed on \
             bacteria and decaying host tissues, then reproduce.",
        ),
        agent(
            "Amblyseius Swirskii",
            &["Swirskimite", "Amblyseius-System"],
            50_000,
            70.0,
            "Predation. Generalist predatory mite feeding on whitefly eggs and \
             larvae, thrips larvae, and spider mites. Can survive on pollen \
             when prey is scarce.",
        ),
        agent(
            "Diglyphus Isaea",
            &["Miglyphus", "Diglyphus-System"],
            500,
            100.0,
            "Ectoparasitism and Host-Feeding. Targets leafminer larvae. \
             Paralyzes prey and lays eggs next to it. Adult wasps also feed \
             directly on young leafminer larvae.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_unique_names() {
        let agents = default_agents();
        for (idx, agent) in agents.iter().enumerate() {
            assert!(
                agents[idx + 1..]
                    .iter()
                    .all(|other| other.scientific_name != agent.scientific_name)
            );
        }
    }

    #[test]
    fn lookup_by_scientific_name() {
        let agents = default_agents();
        let agent = find_agent(&agents, "Aphidius Colemani").unwrap();
        assert_eq!(agent.population_per_unit, 1000);
        assert!(find_agent(&agents, "Unknown Species").is_none());
    }
}
