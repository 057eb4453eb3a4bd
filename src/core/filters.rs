use crate::core::ranking::RankTable;
use crate::models::{CatalogItem, UserProfile};

/// Check whether a profile's hardware meets an item's minimum requirements.
///
/// All three checks must hold: CPU capability, GPU capability, and RAM
/// (integer GiB comparison — RAM is parsed to an integer upstream and never
/// compared as text).
#[inline]
pub fn meets_requirements(
    profile: &UserProfile,
    item: &CatalogItem,
    cpu_ranks: &RankTable,
    gpu_ranks: &RankTable,
) -> bool {
    if !cpu_ranks.at_least_as_capable(&profile.cpu, &item.cpu) {
        return false;
    }

    if !gpu_ranks.at_least_as_capable(&profile.gpu, &item.gpu) {
        return false;
    }

    profile.ram >= item.ram
}

/// Case-insensitive literal substring test against an item's name.
///
/// Literal means literal: the query is user-supplied form text, so pattern
/// metacharacters are inert. An empty query matches every item.
#[inline]
pub fn name_contains(item: &CatalogItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    item.name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_item(cpu: &str, gpu: &str, ram: u32) -> CatalogItem {
        CatalogItem {
            name: "Test Game".to_string(),
            cpu: cpu.to_string(),
            gpu: gpu.to_string(),
            ram,
            image: "test.jpg".to_string(),
        }
    }

    fn create_test_tables() -> (RankTable, RankTable) {
        let cpu: RankTable = [
            ("Old CPU".to_string(), 1),
            ("Mid CPU".to_string(), 2),
            ("New CPU".to_string(), 3),
        ]
        .into_iter()
        .collect();
        let gpu: RankTable = [
            ("Old GPU".to_string(), 1),
            ("Mid GPU".to_string(), 2),
            ("New GPU".to_string(), 3),
        ]
        .into_iter()
        .collect();
        (cpu, gpu)
    }

    #[test]
    fn test_requirements_all_pass() {
        let (cpu, gpu) = create_test_tables();
        let profile = UserProfile {
            cpu: "New CPU".to_string(),
            gpu: "New GPU".to_string(),
            ram: 8,
        };
        let item = create_test_item("Old CPU", "Old GPU", 2);

        assert!(meets_requirements(&profile, &item, &cpu, &gpu));
    }

    #[test]
    fn test_requirements_fail_cpu() {
        let (cpu, gpu) = create_test_tables();
        let profile = UserProfile {
            cpu: "Old CPU".to_string(),
            gpu: "New GPU".to_string(),
            ram: 8,
        };
        let item = create_test_item("New CPU", "Old GPU", 2);

        assert!(!meets_requirements(&profile, &item, &cpu, &gpu));
    }

    #[test]
    fn test_requirements_fail_gpu() {
        let (cpu, gpu) = create_test_tables();
        let profile = UserProfile {
            cpu: "New CPU".to_string(),
            gpu: "Old GPU".to_string(),
            ram: 8,
        };
        let item = create_test_item("Old CPU", "New GPU", 2);

        assert!(!meets_requirements(&profile, &item, &cpu, &gpu));
    }

    #[test]
    fn test_requirements_ram_boundary() {
        let (cpu, gpu) = create_test_tables();
        let item = create_test_item("Old CPU", "Old GPU", 4);

        let short = UserProfile {
            cpu: "New CPU".to_string(),
            gpu: "New GPU".to_string(),
            ram: 2,
        };
        assert!(!meets_requirements(&short, &item, &cpu, &gpu));

        let exact = UserProfile {
            ram: 4,
            ..short.clone()
        };
        assert!(meets_requirements(&exact, &item, &cpu, &gpu));
    }

    #[test]
    fn test_equal_labels_pass_even_when_unranked() {
        let (cpu, gpu) = create_test_tables();
        let profile = UserProfile {
            cpu: "Unlisted CPU".to_string(),
            gpu: "New GPU".to_string(),
            ram: 8,
        };
        let item = create_test_item("Unlisted CPU", "Old GPU", 2);

        assert!(meets_requirements(&profile, &item, &cpu, &gpu));
    }

    #[test]
    fn test_name_contains_case_insensitive() {
        let item = CatalogItem {
            name: "Minecraft".to_string(),
            ..create_test_item("Old CPU", "Old GPU", 2)
        };
        assert!(name_contains(&item, "minecraft"));
        assert!(name_contains(&item, "CRAFT"));
        assert!(!name_contains(&item, "warcraft"));
    }

    #[test]
    fn test_name_contains_empty_query_matches_all() {
        let item = create_test_item("Old CPU", "Old GPU", 2);
        assert!(name_contains(&item, ""));
    }

    #[test]
    fn test_name_contains_metacharacters_are_literal() {
        let item = create_test_item("Old CPU", "Old GPU", 2);
        // "Test Game" contains no dot, so a regex-style wildcard must not match
        assert!(!name_contains(&item, "t.st"));
        assert!(!name_contains(&item, ".*"));
    }
}
