use framebox_types::{Color, ColorField, RenderOptions, ResolvedOptions, Result};

/// Validate the caller's options and resolve every shorthand.
///
/// Colors are checked before the border style, and nothing is rendered
/// until all three have passed.
pub fn normalize(options: &RenderOptions) -> Result<ResolvedOptions> {
    let border_color = resolve_color(options.border_color.as_deref(), ColorField::Border)?;
    let background_color =
        resolve_color(options.background_color.as_deref(), ColorField::Background)?;
    let glyphs = options.border_style.resolve()?;

    Ok(ResolvedOptions {
        border_color,
        glyphs,
        dim_border: options.dim_border,
        padding: options.padding.resolve(),
        margin: options.margin.resolve(),
        float: options.float,
        background_color,
        align: options.align,
    })
}

// An empty string means "no color", matching an absent field.
fn resolve_color(value: Option<&str>, field: ColorField) -> Result<Option<Color>> {
    match value {
        None | Some("") => Ok(None),
        Some(value) => Color::parse(value, field).map(Some),
    }
}
