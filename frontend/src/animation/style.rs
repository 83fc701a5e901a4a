use web_sys::HtmlElement;

/// Anything the effects can restyle.
pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str);
    fn add_class(&self, class: &str);
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.style().set_property(property, value) {
            log::warn!("Failed to set {}: {:?}", property, e);
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("Failed to add class {}: {:?}", class, e);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    Style { property: &'static str, value: String },
    AddClass(String),
}

impl Mutation {
    pub fn style(property: &'static str, value: impl Into<String>) -> Self {
        Mutation::Style {
            property,
            value: value.into(),
        }
    }

    pub fn apply<T: StyleTarget + ?Sized>(&self, target: &T) {
        match self {
            Mutation::Style { property, value } => target.set_style(property, value),
            Mutation::AddClass(class) => target.add_class(class),
        }
    }
}
