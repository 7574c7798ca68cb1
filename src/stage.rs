use crate::constants::{PERSPECTIVE_ORIGIN_PROPS, WORLD_ELEMENT_ID, Z_INDEX_PROP};
use crate::dom;
use holobox_core::{PerspectiveOrigin, Stage, Surface};
use web_sys as web;

/// Writes the controller's output onto the page's box elements.
pub struct DomStage {
    world: web::HtmlElement,
    surfaces: [web::HtmlElement; 6],
}

impl DomStage {
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        let world = dom::html_element(document, WORLD_ELEMENT_ID)?;
        let mut surfaces = Vec::with_capacity(Surface::ALL.len());
        for s in Surface::ALL {
            surfaces.push(dom::html_element(document, s.element_id())?);
        }
        let surfaces: [web::HtmlElement; 6] = surfaces
            .try_into()
            .map_err(|_| anyhow::anyhow!("expected six box surfaces"))?;
        Ok(Self { world, surfaces })
    }

    pub fn world(&self) -> &web::HtmlElement {
        &self.world
    }
}

impl Stage for DomStage {
    fn set_perspective_origin(&mut self, origin: PerspectiveOrigin) {
        let value = origin.to_string();
        let style = self.world.style();
        for prop in PERSPECTIVE_ORIGIN_PROPS {
            _ = style.set_property(prop, &value);
        }
    }

    fn set_z_index(&mut self, surface: Surface, z: usize) {
        _ = self.surfaces[surface.index()]
            .style()
            .set_property(Z_INDEX_PROP, &z.to_string());
    }
}
