use std::rc::Rc;
use std::sync::Arc;

use crate::components::{InputPrimitives, OutlinePrimitives};
use crate::form::{FormAdapter, RegisterAdapter};
use crate::theme::FieldTheme;

/// App-wide defaults for every [`crate::components::Field`].
///
/// Fields fall back to the built-in theme, [`OutlinePrimitives`] and
/// [`RegisterAdapter`] when no provider was installed.
#[derive(Default)]
pub struct FieldProvider {
    theme: Option<FieldTheme>,
    primitives: Option<Rc<dyn InputPrimitives>>,
    adapter: Option<Rc<dyn FormAdapter>>,
}

#[derive(Clone)]
struct ProviderGlobal {
    theme: Arc<FieldTheme>,
    primitives: Rc<dyn InputPrimitives>,
    adapter: Rc<dyn FormAdapter>,
}

impl gpui::Global for ProviderGlobal {}

impl FieldProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(mut self, configure: impl FnOnce(FieldTheme) -> FieldTheme) -> Self {
        let current = self.theme.take().unwrap_or_default();
        self.theme = Some(configure(current));
        self
    }

    pub fn set_primitives(mut self, primitives: impl InputPrimitives + 'static) -> Self {
        self.primitives = Some(Rc::new(primitives));
        self
    }

    pub fn set_adapter(mut self, adapter: impl FormAdapter + 'static) -> Self {
        self.adapter = Some(Rc::new(adapter));
        self
    }

    pub fn init(self, cx: &mut gpui::App) {
        if cx.has_global::<ProviderGlobal>() {
            let global = cx.global_mut::<ProviderGlobal>();
            if let Some(theme) = self.theme {
                global.theme = Arc::new(theme);
            }
            if let Some(primitives) = self.primitives {
                global.primitives = primitives;
            }
            if let Some(adapter) = self.adapter {
                global.adapter = adapter;
            }
            return;
        }

        cx.set_global(ProviderGlobal {
            theme: Arc::new(self.theme.unwrap_or_default()),
            primitives: self
                .primitives
                .unwrap_or_else(|| Rc::new(OutlinePrimitives)),
            adapter: self.adapter.unwrap_or_else(|| Rc::new(RegisterAdapter)),
        });
    }

    pub fn theme(cx: &gpui::App) -> Arc<FieldTheme> {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.theme.clone())
            .unwrap_or_else(|| Arc::new(FieldTheme::default()))
    }

    pub fn primitives(cx: &gpui::App) -> Rc<dyn InputPrimitives> {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.primitives.clone())
            .unwrap_or_else(|| Rc::new(OutlinePrimitives))
    }

    pub fn adapter(cx: &gpui::App) -> Rc<dyn FormAdapter> {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.adapter.clone())
            .unwrap_or_else(|| Rc::new(RegisterAdapter))
    }
}
