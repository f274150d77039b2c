use super::pane::{Binding, ParamPane};

/// Draw the pane as a floating egui window; returns true if a value was edited
///
/// Bindings sharing a dotted prefix are grouped under a collapsible header.
/// Edits go through [`ParamPane::set`] so listeners fire exactly as for any
/// other user edit.
pub fn show_pane(ctx: &egui::Context, title: &str, pane: &ParamPane) -> bool {
    let bindings = pane.bindings();
    let mut edited = false;

    egui::Window::new(title)
        .resizable(false)
        .default_pos(egui::pos2(10.0, 10.0))
        .show(ctx, |ui| {
            let mut index = 0;
            while index < bindings.len() {
                let group = bindings[index].group();
                let end = bindings[index..]
                    .iter()
                    .position(|binding| binding.group() != group)
                    .map_or(bindings.len(), |offset| index + offset);

                match group {
                    Some(name) => {
                        egui::CollapsingHeader::new(
                            egui::RichText::new(name).color(egui::Color32::from_rgb(74, 158, 255)),
                        )
                        .default_open(true)
                        .show(ui, |ui| {
                            for binding in &bindings[index..end] {
                                edited |= binding_row(ui, pane, binding);
                            }
                        });
                    }
                    None => {
                        for binding in &bindings[index..end] {
                            edited |= binding_row(ui, pane, binding);
                        }
                    }
                }
                index = end;
            }
        });

    edited
}

fn binding_row(ui: &mut egui::Ui, pane: &ParamPane, binding: &Binding) -> bool {
    let mut value = binding.value;
    let decimals = if binding.spec.step >= 1.0 { 0 } else { 3 };

    let changed = ui
        .horizontal(|ui| {
            ui.label(egui::RichText::new(binding.label()).color(egui::Color32::GRAY));
            ui.add(
                egui::DragValue::new(&mut value)
                    .range(binding.spec.min..=binding.spec.max)
                    // Mirrored values may sit outside the range; only edits clamp
                    .clamp_existing_to_range(false)
                    .speed(binding.spec.step.max(0.01))
                    .fixed_decimals(decimals),
            )
            .changed()
        })
        .inner;

    if changed {
        if let Err(err) = pane.set(&binding.key, value) {
            log::warn!("pane edit rejected: {err}");
            return false;
        }
    }
    changed
}
