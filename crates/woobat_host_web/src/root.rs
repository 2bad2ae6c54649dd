//! `document.documentElement` presentation root.

use woobat_host::PresentationRoot;

#[derive(Debug, Clone, Copy, Default)]
/// Presentation root backed by the live document element.
pub struct WebPresentationRoot;

#[cfg(target_arch = "wasm32")]
fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl PresentationRoot for WebPresentationRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(root) = document_element() {
                let _ = root.set_attribute(name, value);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (name, value);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            document_element()?.get_attribute(name)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = name;
            None
        }
    }

    fn swap_classes(&self, remove: &[&str], add: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(root) = document_element() else {
                return;
            };
            let classes = root.class_list();
            for class in remove {
                let _ = classes.remove_1(class);
            }
            let _ = classes.add_1(add);
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (remove, add);
    }

    fn css_variable(&self, name: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window()?;
            let root = window.document()?.document_element()?;
            let style = window.get_computed_style(&root).ok().flatten()?;
            let value = style.get_property_value(name).ok()?;
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = name;
            None
        }
    }
}
