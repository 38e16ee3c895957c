use crate::domain::model::{Category, Project};
use serde::Serialize;

/// Projects matching `selected`, in original order. `All` keeps every project.
pub fn visible_projects<'a>(projects: &'a [Project], selected: &Category) -> Vec<&'a Project> {
    if selected.is_all() {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|project| &project.category == selected)
        .collect()
}

/// One button on the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub category: Category,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct CategoryFilter<'a> {
    projects: &'a [Project],
    selected: Category,
}

impl<'a> CategoryFilter<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            projects,
            selected: Category::All,
        }
    }

    pub fn set_category(&mut self, category: impl Into<Category>) {
        let category = category.into();
        if let Category::Other(name) = &category {
            tracing::debug!(category = %name, "filtering by unrecognized category");
        }
        self.selected = category;
    }

    pub fn selected(&self) -> &Category {
        &self.selected
    }

    pub fn visible(&self) -> Vec<&'a Project> {
        visible_projects(self.projects, &self.selected)
    }

    pub fn tabs(&self) -> Vec<CategoryTab> {
        std::iter::once(Category::All)
            .chain(Category::NAMED)
            .map(|category| CategoryTab {
                selected: category == self.selected,
                category,
            })
            .collect()
    }
}
