use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::workflows::hiring::domain::InterviewerType;

/// Identifier for a stage definition in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StageId(pub String);

/// One row of the ordered stage catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDefinition {
    pub id: StageId,
    pub name: String,
    pub order: u32,
}

/// Immutable stage catalog plus the stage-name to interviewer-type map.
///
/// Both lookups are fixed at construction and injected into the scheduler.
/// They are deliberately distinct: a stage can exist in the catalog without
/// an interviewer type mapped to its name, and the scheduler treats that as
/// a business-rule violation rather than a missing stage.
#[derive(Debug, Clone)]
pub struct StageCatalog {
    stages: Vec<StageDefinition>,
    interviewer_types: BTreeMap<String, InterviewerType>,
}

impl StageCatalog {
    pub fn new(
        mut stages: Vec<StageDefinition>,
        interviewer_types: BTreeMap<String, InterviewerType>,
    ) -> Self {
        stages.sort_by_key(|stage| stage.order);
        Self {
            stages,
            interviewer_types,
        }
    }

    /// The standard four-stage pipeline.
    pub fn standard() -> Self {
        let stages = vec![
            StageDefinition {
                id: StageId("stage-hr".to_string()),
                name: "HR Interview".to_string(),
                order: 1,
            },
            StageDefinition {
                id: StageId("stage-technical".to_string()),
                name: "Technical Round".to_string(),
                order: 2,
            },
            StageDefinition {
                id: StageId("stage-cultural".to_string()),
                name: "Cultural Fit".to_string(),
                order: 3,
            },
            StageDefinition {
                id: StageId("stage-final".to_string()),
                name: "Final Round".to_string(),
                order: 4,
            },
        ];

        let mut interviewer_types = BTreeMap::new();
        interviewer_types.insert("HR Interview".to_string(), InterviewerType::Hr);
        interviewer_types.insert("Technical Round".to_string(), InterviewerType::Technical);
        interviewer_types.insert("Cultural Fit".to_string(), InterviewerType::Cultural);
        interviewer_types.insert("Final Round".to_string(), InterviewerType::Final);

        Self::new(stages, interviewer_types)
    }

    /// The stage with the lowest order, i.e. where every applicant starts.
    pub fn first_stage(&self) -> Option<&StageDefinition> {
        self.stages.first()
    }

    pub fn stage_by_name(&self, name: &str) -> Option<&StageDefinition> {
        self.stages.iter().find(|stage| stage.name == name)
    }

    pub fn stage_by_id(&self, id: &StageId) -> Option<&StageDefinition> {
        self.stages.iter().find(|stage| &stage.id == id)
    }

    /// Exact-order lookup. A gap in the order sequence yields `None`, which
    /// the scheduler reports as the process being complete.
    pub fn stage_with_order(&self, order: u32) -> Option<&StageDefinition> {
        self.stages.iter().find(|stage| stage.order == order)
    }

    /// Exact-match lookup in the name-to-type map.
    pub fn required_interviewer_type(&self, stage_name: &str) -> Option<InterviewerType> {
        self.interviewer_types.get(stage_name).copied()
    }

    pub fn stages(&self) -> &[StageDefinition] {
        &self.stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unordered_catalog() -> StageCatalog {
        let stages = vec![
            StageDefinition {
                id: StageId("stage-b".to_string()),
                name: "Second".to_string(),
                order: 5,
            },
            StageDefinition {
                id: StageId("stage-a".to_string()),
                name: "First".to_string(),
                order: 2,
            },
        ];
        StageCatalog::new(stages, BTreeMap::new())
    }

    #[test]
    fn first_stage_is_lowest_order_even_when_constructed_unsorted() {
        let catalog = unordered_catalog();
        assert_eq!(catalog.first_stage().map(|stage| stage.name.as_str()), Some("First"));
    }

    #[test]
    fn order_gaps_yield_no_next_stage() {
        let catalog = unordered_catalog();
        assert!(catalog.stage_with_order(3).is_none());
        assert!(catalog.stage_with_order(5).is_some());
    }

    #[test]
    fn unmapped_stage_name_has_no_required_type() {
        let catalog = unordered_catalog();
        assert_eq!(catalog.required_interviewer_type("First"), None);
    }

    #[test]
    fn standard_catalog_maps_every_stage() {
        let catalog = StageCatalog::standard();
        assert_eq!(catalog.stages().len(), 4);
        for stage in catalog.stages() {
            assert!(catalog.required_interviewer_type(&stage.name).is_some());
        }
        assert_eq!(
            catalog.required_interviewer_type("HR Interview"),
            Some(InterviewerType::Hr)
        );
    }
}
