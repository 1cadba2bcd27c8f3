use folio_model::{CareerEntry, Category, Credential, ProjectContent, ProjectDetail, Skill};
use folio_sync::{
    ApiClient, ApiConfig, CareerBoard, CertificationBoard, ConsoleResult, Endpoint,
    HttpCollection, HttpProjectDirectory, MemoryCollection, MemoryProjectDirectory, ProjectBoard,
    ProjectCatalog, ProjectDirectory, RemoteCollection, SkillBoard,
};
use folio_types::EntityId;
use std::sync::Arc;

/// The remote collaborators every board is built from.
pub struct Backend {
    pub skills: Arc<dyn RemoteCollection<Skill>>,
    pub categories: Arc<dyn RemoteCollection<Category>>,
    pub projects: Arc<dyn ProjectDirectory>,
    pub certifications: Arc<dyn RemoteCollection<Credential>>,
    pub awards: Arc<dyn RemoteCollection<Credential>>,
    pub businesses: Arc<dyn RemoteCollection<CareerEntry>>,
    pub career_projects: Arc<dyn RemoteCollection<CareerEntry>>,
}

impl Backend {
    /// Collaborators talking to the content API.
    pub fn http(config: &ApiConfig) -> ConsoleResult<Self> {
        let api = Arc::new(ApiClient::new(config.clone())?);
        let skills: HttpCollection<Skill> = HttpCollection::new(Arc::clone(&api), Endpoint::skills());
        let categories: HttpCollection<Category> =
            HttpCollection::new(Arc::clone(&api), Endpoint::categories());
        let certifications: HttpCollection<Credential> =
            HttpCollection::new(Arc::clone(&api), Endpoint::certifications());
        let awards: HttpCollection<Credential> =
            HttpCollection::new(Arc::clone(&api), Endpoint::awards());
        let businesses: HttpCollection<CareerEntry> =
            HttpCollection::new(Arc::clone(&api), Endpoint::businesses());
        let career_projects: HttpCollection<CareerEntry> =
            HttpCollection::new(Arc::clone(&api), Endpoint::career_projects());

        Ok(Self {
            skills: Arc::new(skills),
            categories: Arc::new(categories),
            projects: Arc::new(HttpProjectDirectory::new(api)),
            certifications: Arc::new(certifications),
            awards: Arc::new(awards),
            businesses: Arc::new(businesses),
            career_projects: Arc::new(career_projects),
        })
    }

    /// In-memory collaborators seeded with a small sample portfolio.
    pub fn demo() -> Self {
        let skills = vec![
            demo_skill("rust", "Rust", Some("backend"), 0),
            demo_skill("go", "Go", Some("backend"), 1),
            demo_skill("postgres", "PostgreSQL", Some("backend"), 2),
            demo_skill("k8s", "Kubernetes", Some("infra"), 0),
            demo_skill("terraform", "Terraform", Some("infra"), 1),
            demo_skill("figma", "Figma", None, 0),
        ];
        let categories = vec![
            Category {
                id: EntityId::new("backend"),
                name: "Backend".into(),
                order: Some(0),
            },
            Category {
                id: EntityId::new("infra"),
                name: "Infrastructure".into(),
                order: Some(1),
            },
        ];

        let projects = MemoryProjectDirectory::new();
        projects.insert(ProjectDetail {
            id: EntityId::new("folio"),
            title: "Folio".into(),
            description: Some("Portfolio site and admin console".into()),
            skills: Some(vec!["Rust".into(), "TypeScript".into()]),
            participants: Some(1),
            period: Some("2024.01 - 2024.06".into()),
            order: Some(0),
            contents: Some(vec![
                demo_content("overview", None, 0, "Overview"),
                demo_content("stack", None, 1, "Stack"),
                demo_content("api", Some("stack"), 0, "REST API with replace semantics"),
                demo_content("ui", Some("stack"), 1, "Drag-and-drop ordering"),
                demo_content("results", None, 2, "Results"),
            ]),
        });

        Self {
            skills: Arc::new(MemoryCollection::seeded("skill", skills)),
            categories: Arc::new(MemoryCollection::seeded("category", categories)),
            projects: Arc::new(projects),
            certifications: Arc::new(MemoryCollection::seeded(
                "certification",
                vec![
                    demo_credential("cka", "CKA", 0),
                    demo_credential("aws-sa", "AWS Solutions Architect", 1),
                ],
            )),
            awards: Arc::new(MemoryCollection::seeded(
                "award",
                vec![demo_credential("hackathon", "Hackathon winner", 0)],
            )),
            businesses: Arc::new(MemoryCollection::seeded(
                "business",
                vec![demo_career("acme", "Acme", 0)],
            )),
            career_projects: Arc::new(MemoryCollection::seeded(
                "career project",
                vec![demo_career("billing", "Billing platform", 0)],
            )),
        }
    }

    pub fn skill_board(&self, config: &ApiConfig) -> SkillBoard {
        SkillBoard::new(Arc::clone(&self.skills), Arc::clone(&self.categories), config)
    }

    pub fn project_catalog(&self, config: &ApiConfig) -> ProjectCatalog {
        ProjectCatalog::new(Arc::clone(&self.projects), config)
    }

    pub fn project_board(&self, id: EntityId, config: &ApiConfig) -> ProjectBoard {
        ProjectBoard::new(Arc::clone(&self.projects), id, config)
    }

    pub fn certification_board(&self, config: &ApiConfig) -> CertificationBoard {
        CertificationBoard::new(
            Arc::clone(&self.certifications),
            Arc::clone(&self.awards),
            config,
        )
    }

    pub fn career_board(&self, config: &ApiConfig) -> CareerBoard {
        CareerBoard::new(
            Arc::clone(&self.businesses),
            Arc::clone(&self.career_projects),
            config,
        )
    }
}

fn demo_skill(id: &str, name: &str, category: Option<&str>, order: u32) -> Skill {
    Skill {
        id: EntityId::new(id),
        name: name.into(),
        category_id: category.map(EntityId::new),
        order: Some(order),
    }
}

fn demo_content(id: &str, parent: Option<&str>, order: u32, text: &str) -> ProjectContent {
    ProjectContent {
        id: EntityId::new(id),
        parent_id: parent.map(EntityId::new),
        order: Some(order),
        content: text.into(),
        children: None,
        project_id: None,
    }
}

fn demo_credential(id: &str, name: &str, order: u32) -> Credential {
    Credential {
        id: EntityId::new(id),
        name: name.into(),
        date: "23.09.".into(),
        organization: None,
        tier: None,
        order_index: Some(order),
    }
}

fn demo_career(id: &str, company: &str, order: u32) -> CareerEntry {
    CareerEntry {
        id: EntityId::new(id),
        start_date: "2021.03".into(),
        end_date: None,
        company: company.into(),
        department: None,
        position: None,
        skills: None,
        details: None,
        order_index: Some(order),
    }
}
