use serde::Serialize;

/// Placeholder item standing in for "this category has no items".
pub const SENTINEL: &str = "undefined";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Languages,
    Frameworks,
    Libraries,
    Tools,
    Software,
}

impl Category {
    /// Render order, top to bottom. Also the metadata lookup priority.
    pub const ALL: [Category; 5] = [
        Category::Languages,
        Category::Frameworks,
        Category::Libraries,
        Category::Tools,
        Category::Software,
    ];

    pub fn type_tag(self) -> u32 {
        match self {
            Self::Languages => 1,
            Self::Frameworks => 2,
            Self::Libraries => 3,
            Self::Tools => 4,
            Self::Software => 5,
        }
    }

    pub fn index(self) -> usize {
        self.type_tag() as usize - 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Frameworks => "Frameworks",
            Self::Libraries => "Libraries",
            Self::Tools => "Tools",
            Self::Software => "Software",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "languages" => Some(Self::Languages),
            "frameworks" => Some(Self::Frameworks),
            "libraries" => Some(Self::Libraries),
            "tools" => Some(Self::Tools),
            "software" | "software-ides" => Some(Self::Software),
            _ => None,
        }
    }
}

/// Ordered item keys for one category, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryList {
    items: Vec<String>,
}

impl CategoryList {
    /// Splits a comma-joined input. Absent or empty input yields the sentinel list.
    /// Items are neither trimmed nor deduplicated.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(value) if !value.is_empty() => value,
            _ => SENTINEL,
        };
        Self {
            items: raw.split(',').map(str::to_string).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Length including the sentinel, so never zero.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.items.len() > 1 || self.items.first().is_some_and(|item| item != SENTINEL)
    }
}

impl Default for CategoryList {
    fn default() -> Self {
        Self::parse(None)
    }
}

/// The five category lists of one render call.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    lists: [CategoryList; 5],
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_inputs(
        languages: Option<&str>,
        frameworks: Option<&str>,
        libraries: Option<&str>,
        tools: Option<&str>,
        software: Option<&str>,
    ) -> Self {
        Self {
            lists: [
                CategoryList::parse(languages),
                CategoryList::parse(frameworks),
                CategoryList::parse(libraries),
                CategoryList::parse(tools),
                CategoryList::parse(software),
            ],
        }
    }

    pub fn set(&mut self, category: Category, raw: Option<&str>) {
        self.lists[category.index()] = CategoryList::parse(raw);
    }

    pub fn list(&self, category: Category) -> &CategoryList {
        &self.lists[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryList)> {
        Category::ALL.into_iter().map(|category| (category, self.list(category)))
    }

    /// Sum of all list lengths, sentinel lists counting as one.
    pub fn total_len(&self) -> usize {
        self.lists.iter().map(CategoryList::len).sum()
    }
}
