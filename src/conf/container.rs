//! Ordered collections of elements.

use super::clause::Clause;
use super::element::Element;
use super::statement::Statement;
use tracing::trace;

//------------ Container -----------------------------------------------------

/// A type holding an ordered list of elements.
///
/// This is implemented by [`Clause`] and [`Configuration`] as well as by
/// all the BIND specific clause types. Only the two access methods need to
/// be provided; lookup and manipulation by label come for free.
///
/// All operations only consider the direct children of the container.
///
/// Only things that can be turned into an [`Element`] can be added, so
/// anything else is refused by the compiler:
///
/// ```compile_fail
/// use bindconf::conf::{Configuration, Container};
///
/// let mut conf = Configuration::new();
/// conf.add_element("type master");
/// ```
///
/// [`Clause`]: super::Clause
/// [`Configuration`]: super::Configuration
pub trait Container {
    /// Returns the children in order.
    fn elements(&self) -> &[Element];

    /// Returns a mutable reference to the list of children.
    fn elements_mut(&mut self) -> &mut Vec<Element>;

    /// Appends an element.
    fn add_element(&mut self, element: impl Into<Element>) {
        self.elements_mut().push(element.into())
    }

    /// Returns all children with the given label in their original order.
    fn get_elements(&self, label: &str) -> Vec<&Element> {
        self.elements()
            .iter()
            .filter(|elem| elem.label() == label)
            .collect()
    }

    /// Removes all children with the given label.
    ///
    /// The order of the remaining children is kept. Returns the number of
    /// elements removed.
    fn remove_elements(&mut self, label: &str) -> usize {
        let elements = self.elements_mut();
        let len = elements.len();
        elements.retain(|elem| elem.label() != label);
        len - elements.len()
    }

    /// Replaces all children with the element’s label by the element.
    ///
    /// This is how statements that may only appear once are set.
    fn set_element(&mut self, element: impl Into<Element>) {
        let element = element.into();
        let removed = self.remove_elements(element.label());
        trace!(label = element.label(), removed, "replacing element");
        self.add_element(element)
    }

    /// Returns the first statement with the given label.
    fn statement_mut(&mut self, label: &str) -> Option<&mut Statement> {
        self.elements_mut()
            .iter_mut()
            .filter_map(Element::as_statement_mut)
            .find(|stmt| stmt.label() == label)
    }

    /// Returns the first clause with the given label.
    fn clause_mut(&mut self, label: &str) -> Option<&mut Clause> {
        self.elements_mut()
            .iter_mut()
            .filter_map(Element::as_clause_mut)
            .find(|clause| clause.label() == label)
    }

    /// Returns whether there are no children.
    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }
}
