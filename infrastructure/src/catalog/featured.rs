//! Built-in featured catalog, used when no catalog file is configured

use nexus_domain::{BudgetItem, Category, Project, ProjectId, Researcher};

struct Seed {
    id: &'static str,
    title: &'static str,
    brief: &'static str,
    category: Category,
    researcher: (&'static str, &'static str, &'static str),
    goal: f64,
    raised: f64,
    backers: u32,
    milestones: &'static [&'static str],
    completed: u32,
    impact: &'static str,
    budget: &'static [(&'static str, f64)],
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "p1",
        title: "Neuroprotection for Newborns with HIE",
        brief: "Testing an adjunct drug alongside therapeutic hypothermia to reduce brain injury in infants with hypoxic-ischemic encephalopathy.",
        category: Category::ClinicalTrial,
        researcher: ("Dr. Sarah Jenkins", "Associate Professor of Neonatology", "Stanford University"),
        goal: 450_000.0,
        raised: 312_000.0,
        backers: 214,
        milestones: &["IRB approval", "Enroll first 20 infants", "Interim safety review", "18-month outcomes"],
        completed: 2,
        impact: "Could cut rates of cerebral palsy after birth asphyxia by a third.",
        budget: &[("Personnel", 240_000.0), ("Clinical supplies", 130_000.0), ("Follow-up imaging", 80_000.0)],
    },
    Seed {
        id: "p2",
        title: "Improving Memory in Down Syndrome",
        brief: "Repurposing an approved antioxidant to improve memory and learning in young adults with Down Syndrome.",
        category: Category::DrugRepurposing,
        researcher: ("Dr. Marcus Webb", "Professor of Neurology", "University of Colorado"),
        goal: 280_000.0,
        raised: 96_500.0,
        backers: 143,
        milestones: &["Dose finding", "Cognitive battery validation", "Pilot cohort results"],
        completed: 1,
        impact: "A low-cost daily pill that families could access within years, not decades.",
        budget: &[("Study drug", 60_000.0), ("Neuropsychology testing", 120_000.0), ("Coordinators", 100_000.0)],
    },
    Seed {
        id: "p3",
        title: "AAV Gene Therapy for Spinal Muscular Atrophy",
        brief: "Delivering a working SMN1 gene to motor neurons with a next-generation AAV vector that needs a lower dose.",
        category: Category::GeneTherapy,
        researcher: ("Dr. Priya Raman", "Director, Gene Therapy Core", "Nationwide Children's Hospital"),
        goal: 900_000.0,
        raised: 540_000.0,
        backers: 388,
        milestones: &["Vector manufacturing", "Large-animal safety study", "IND filing", "First patient dosed"],
        completed: 2,
        impact: "Lower vector doses mean fewer liver side effects for the smallest patients.",
        budget: &[("Vector production", 500_000.0), ("Toxicology", 250_000.0), ("Regulatory", 150_000.0)],
    },
    Seed {
        id: "p4",
        title: "Mapping Synapse Formation in the Developing Brain",
        brief: "Building a high-resolution atlas of how synapses form in the first year of life to find windows for early intervention.",
        category: Category::BasicScience,
        researcher: ("Dr. Tomas Lindqvist", "Assistant Professor of Neuroscience", "Karolinska Institutet"),
        goal: 320_000.0,
        raised: 41_000.0,
        backers: 37,
        milestones: &["Tissue collection", "Imaging pipeline", "Public atlas release"],
        completed: 0,
        impact: "An open reference every pediatric neurology lab can build on.",
        budget: &[("Microscopy", 180_000.0), ("Data storage", 40_000.0), ("Postdoc salary", 100_000.0)],
    },
    Seed {
        id: "p5",
        title: "CRISPR Base Editing for Rett Syndrome",
        brief: "Correcting the most common MECP2 point mutations directly in neurons using base editing.",
        category: Category::GeneTherapy,
        researcher: ("Dr. Elena Morales", "Principal Investigator", "Broad Institute"),
        goal: 600_000.0,
        raised: 180_000.0,
        backers: 122,
        milestones: &["Editor optimization", "Mouse model rescue", "Off-target analysis", "Delivery in primates"],
        completed: 1,
        impact: "A one-time treatment that fixes the root cause instead of managing symptoms.",
        budget: &[("Reagents", 200_000.0), ("Animal studies", 260_000.0), ("Sequencing", 140_000.0)],
    },
    Seed {
        id: "p6",
        title: "Patient-Derived Organoids for Rare Epilepsy",
        brief: "Growing brain organoids from patient cells to screen existing drugs against rare genetic epilepsies.",
        category: Category::DiseaseModeling,
        researcher: ("Dr. Kenji Watanabe", "Associate Professor of Pediatrics", "UCSF"),
        goal: 350_000.0,
        raised: 275_000.0,
        backers: 201,
        milestones: &["Patient cell lines", "Organoid protocol", "Drug screen", "Clinical follow-up"],
        completed: 3,
        impact: "Matches each child to the drug most likely to stop their seizures.",
        budget: &[("Cell culture", 150_000.0), ("Screening library", 120_000.0), ("Personnel", 80_000.0)],
    },
];

/// Six verified projects across all five categories
pub fn featured_projects() -> Vec<Project> {
    SEEDS.iter().map(Seed::to_project).collect()
}

impl Seed {
    fn to_project(&self) -> Project {
        let (name, title, institution) = self.researcher;
        Project {
            id: ProjectId::new(self.id),
            title: self.title.to_string(),
            brief: self.brief.to_string(),
            category: self.category,
            researcher: Researcher {
                name: name.to_string(),
                title: title.to_string(),
                institution: institution.to_string(),
                verified: true,
            },
            funding_goal: self.goal,
            funding_raised: self.raised,
            backers_count: self.backers,
            milestones_completed: self.completed,
            total_milestones: self.milestones.len() as u32,
            milestones: self.milestones.iter().map(|m| m.to_string()).collect(),
            impact_statement: Some(self.impact.to_string()),
            budget_breakdown: self
                .budget
                .iter()
                .map(|(category, amount)| BudgetItem {
                    category: category.to_string(),
                    amount: *amount,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_covers_every_category() {
        let projects = featured_projects();
        assert_eq!(projects.len(), 6);
        let categories: HashSet<_> = projects.iter().map(|p| p.category).collect();
        assert_eq!(categories.len(), Category::ALL.len());
    }

    #[test]
    fn test_ids_unique_and_funding_valid() {
        let projects = featured_projects();
        let ids: HashSet<_> = projects.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), projects.len());
        assert!(projects.iter().all(|p| p.has_valid_funding()));
        assert!(
            projects
                .iter()
                .all(|p| p.milestones_completed <= p.total_milestones)
        );
    }

    #[test]
    fn test_hie_project_is_findable() {
        let projects = featured_projects();
        let hie: Vec<_> = projects
            .iter()
            .filter(|p| {
                let text = p.searchable_text();
                text.contains("hie") || text.contains("hypothermia")
            })
            .collect();
        assert_eq!(hie.len(), 1);
        assert_eq!(hie[0].id.as_str(), "p1");
    }
}
