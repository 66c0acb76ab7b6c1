//! Project cards and where their "view" action leads.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: &'static str,
    pub demo: &'static str,
}

/// Which link the visitor picked in the chooser dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkChoice {
    Demo,
    Source,
}

impl LinkChoice {
    /// The chooser is a confirm dialog: OK means demo, Cancel means source.
    pub fn from_confirm(confirmed: bool) -> Self {
        if confirmed {
            LinkChoice::Demo
        } else {
            LinkChoice::Source
        }
    }
}

pub const PROJECT_CHOOSER_PROMPT: &str = "Choose:\nOK = View Live Demo\nCancel = View GitHub Code";

const CATALOG: [(&str, ProjectLinks); 3] = [
    (
        "ecommerce",
        ProjectLinks {
            github: "https://github.com/anshusharma/ecommerce-platform",
            demo: "ecommerce-demo.html",
        },
    ),
    (
        "banking",
        ProjectLinks {
            github: "https://github.com/anshusharma/banking-app",
            demo: "banking-demo.html",
        },
    ),
    (
        "dashboard",
        ProjectLinks {
            github: "https://github.com/anshusharma/cloud-dashboard",
            demo: "dashboard-demo.html",
        },
    ),
];

pub fn project_links(key: &str) -> Option<ProjectLinks> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, links)| *links)
}

impl ProjectLinks {
    pub fn url_for(&self, choice: LinkChoice) -> &'static str {
        match choice {
            LinkChoice::Demo => self.demo,
            LinkChoice::Source => self.github,
        }
    }
}
