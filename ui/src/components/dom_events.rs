//! Feeds synthetic DOM events into a `VirtualDom` so component tests can
//! click and type without a renderer.

use std::any::Any;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::ElementId;
use dioxus_core::Mutation;
use dioxus_core::Mutations;
use dioxus_core::NoOpMutations;
use dioxus_html::PlatformEventData;
use dioxus_html::SerializedFormData;
use dioxus_html::SerializedHtmlEventConverter;
use dioxus_html::SerializedMouseData;

/// Builds the dom and returns the elements listening for `event`, in
/// creation order.
pub(crate) fn rebuild_listening(dom: &mut VirtualDom, event: &str) -> Vec<ElementId> {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

    let mut mutations = Mutations::default();
    dom.rebuild(&mut mutations);

    mutations
        .edits
        .into_iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == event => Some(id),
            _ => None,
        })
        .collect()
}

pub(crate) fn click(dom: &mut VirtualDom, target: ElementId) {
    dispatch(dom, "click", SerializedMouseData::default(), target);
}

pub(crate) fn type_text(dom: &mut VirtualDom, target: ElementId, text: &str) {
    let data: SerializedFormData = serde_json::from_value(serde_json::json!({ "value": text }))
        .expect("form event payload");
    dispatch(dom, "input", data, target);
}

fn dispatch<T: 'static>(dom: &mut VirtualDom, name: &str, data: T, target: ElementId) {
    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::new(data))) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event(name, event, target);
    dom.render_immediate(&mut NoOpMutations);
}
