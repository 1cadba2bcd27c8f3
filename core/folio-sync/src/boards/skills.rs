use super::note_reorder;
use crate::collection::ManagedCollection;
use crate::config::ApiConfig;
use crate::error::{ErrorBanner, Failure, FailureKind};
use crate::reconciler::ReconcileOutcome;
use crate::remote::RemoteCollection;
use folio_model::{Category, CategoryRequest, Skill, SkillRequest};
use folio_order::{group, next_order, Group, Groups};
use folio_types::{EntityId, GroupKey};
use std::collections::HashSet;
use std::sync::Arc;

/// Skills grouped by category, plus the categories themselves.
pub struct SkillBoard {
    skills: ManagedCollection<Skill>,
    categories: ManagedCollection<Category>,
    expanded: HashSet<GroupKey>,
    banner: ErrorBanner,
}

impl SkillBoard {
    pub fn new(
        skills: Arc<dyn RemoteCollection<Skill>>,
        categories: Arc<dyn RemoteCollection<Category>>,
        config: &ApiConfig,
    ) -> Self {
        Self {
            skills: ManagedCollection::new(skills, config.write_timeout()),
            categories: ManagedCollection::new(categories, config.write_timeout()),
            expanded: HashSet::new(),
            banner: ErrorBanner::default(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn clear_error(&mut self) {
        self.banner.clear();
    }

    /// Skills in storage order.
    pub fn skills(&self) -> &[Skill] {
        self.skills.items()
    }

    pub fn skill_version(&self) -> u64 {
        self.skills.state().version()
    }

    /// Categories sorted by order.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.sorted()
    }

    fn category_keys(&self) -> Vec<EntityId> {
        self.categories().into_iter().map(|c| c.id).collect()
    }

    /// Skills partitioned by category, categories in display order and the
    /// uncategorized bucket last.
    pub fn groups(&self) -> Groups<'_, Skill> {
        group(self.skills.items(), &self.category_keys())
    }

    /// Owned members of one group, sorted by order.
    pub fn group_members(&self, key: &GroupKey) -> Vec<Skill> {
        self.groups().get(key).map(Group::to_vec).unwrap_or_default()
    }

    /// Display name of a group.
    pub fn group_label(&self, key: &GroupKey) -> String {
        match key.parent_id() {
            Some(id) => self
                .categories
                .get(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.to_string()),
            None => "Uncategorized".to_string(),
        }
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Loads skills and categories concurrently. Either failing leaves both
    /// untouched.
    pub async fn load(&mut self) -> Result<(), Failure> {
        self.banner.clear();
        let (skills, categories) = futures::join!(self.skills.fetch(), self.categories.fetch());
        match (skills, categories) {
            (Ok(skills), Ok(categories)) => {
                self.skills.replace(skills);
                self.categories.replace(categories);
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => Err(self.banner.raise(FailureKind::Load, err)),
        }
    }

    // ── Reordering ───────────────────────────────────────────────────

    /// Drag of skill `active` onto skill `over` within the group `key`.
    pub async fn reorder_skill(&mut self, key: &GroupKey, active: &str, over: &str) -> ReconcileOutcome {
        let group = self.group_members(key);
        let outcome = self.skills.reorder(&group, active, over).await;
        note_reorder(&mut self.banner, "skill", &outcome);
        outcome
    }

    /// Drag of category `active` onto category `over`.
    pub async fn reorder_category(&mut self, active: &str, over: &str) -> ReconcileOutcome {
        let outcome = self.categories.reorder_all(active, over).await;
        note_reorder(&mut self.banner, "category", &outcome);
        outcome
    }

    // ── Skills ───────────────────────────────────────────────────────

    /// Payload for a new skill appended to group `key`.
    pub fn draft_skill(&self, key: &GroupKey) -> SkillRequest {
        SkillRequest {
            name: String::new(),
            category_id: key.parent_id().cloned(),
            order: Some(next_order(self.groups().members(key))),
        }
    }

    pub fn edit_skill(&self, id: &EntityId) -> Option<SkillRequest> {
        self.skills.edit(id)
    }

    /// Creates or replaces a skill, then reloads the board.
    pub async fn save_skill(
        &mut self,
        editing: Option<&EntityId>,
        request: SkillRequest,
    ) -> Result<Skill, Failure> {
        let saved = self
            .skills
            .save(editing, &request)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Save, err))?;
        // A failed reload is already on the banner.
        let _ = self.load().await;
        Ok(saved)
    }

    pub async fn delete_skill(&mut self, id: &EntityId) -> Result<(), Failure> {
        self.skills
            .delete(id)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Delete, err))?;
        let _ = self.load().await;
        Ok(())
    }

    // ── Categories ───────────────────────────────────────────────────

    pub fn draft_category(&self) -> CategoryRequest {
        CategoryRequest {
            name: String::new(),
            order: Some(self.categories.next_order()),
        }
    }

    pub fn edit_category(&self, id: &EntityId) -> Option<CategoryRequest> {
        self.categories.edit(id)
    }

    pub async fn save_category(
        &mut self,
        editing: Option<&EntityId>,
        request: CategoryRequest,
    ) -> Result<Category, Failure> {
        let saved = self
            .categories
            .save(editing, &request)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Save, err))?;
        let _ = self.load().await;
        Ok(saved)
    }

    /// Deletes a category. The remote moves its skills to the uncategorized
    /// bucket; the reload picks that up.
    pub async fn delete_category(&mut self, id: &EntityId) -> Result<(), Failure> {
        self.categories
            .delete(id)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Delete, err))?;
        self.expanded.remove(&GroupKey::Keyed(id.clone()));
        let _ = self.load().await;
        Ok(())
    }

    // ── Accordion ────────────────────────────────────────────────────

    pub fn is_expanded(&self, key: &GroupKey) -> bool {
        self.expanded.contains(key)
    }

    pub fn toggle(&mut self, key: GroupKey) {
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    pub fn expand_all(&mut self) {
        self.expanded = self
            .category_keys()
            .into_iter()
            .map(GroupKey::Keyed)
            .chain(std::iter::once(GroupKey::Uncategorized))
            .collect();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
