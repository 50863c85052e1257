use super::escape;
use super::traits::StructureWriter;
use super::xyz::format_atom_line;
use crate::core::models::molecule::Molecule;
use std::io::{self, Write};
use thiserror::Error;

/// Pinned 3Dmol.js build loaded by the browser when the document is opened.
pub const DEFAULT_LIBRARY_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/3Dmol/2.1.0/3Dmol-min.js";
pub const DEFAULT_VIEWER_COMMENT: &str = "Generated from MOPAC";

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Presentation settings of the generated viewer document.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    /// Text of the document `<title>`.
    pub title: String,
    /// Viewer background, in any color notation 3Dmol.js accepts.
    pub background_color: String,
    pub library_url: String,
    /// Comment line of the embedded XYZ data.
    pub comment: String,
    /// Sphere radius scale of the ball-and-stick style.
    pub sphere_scale: f64,
    /// Text placed before each charge value in the atom labels.
    pub label_prefix: String,
    pub label_font_size: u32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: "3D Molecule Viewer".to_string(),
            background_color: "0xeeeeee".to_string(),
            library_url: DEFAULT_LIBRARY_URL.to_string(),
            comment: DEFAULT_VIEWER_COMMENT.to_string(),
            sphere_scale: 0.3,
            label_prefix: "Mulliken".to_string(),
            label_font_size: 12,
        }
    }
}

/// A standalone HTML document that renders the molecule with 3Dmol.js.
///
/// The structure is embedded as an XYZ string literal. When every atom carries a
/// Mulliken charge, one static label per atom is emitted at the atom's position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerDocument {
    options: ViewerOptions,
}

impl ViewerDocument {
    pub fn new(options: ViewerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// Builds the XYZ text embedded in the document, with real line breaks.
    fn xyz_data(&self, molecule: &Molecule) -> String {
        let mut data = format!(
            "{}\n{}\n",
            molecule.len(),
            self.options.comment.replace(['\r', '\n'], " ")
        );
        for atom in molecule {
            data.push_str(&format_atom_line(atom));
            data.push('\n');
        }
        data
    }

    fn write_labels(&self, molecule: &Molecule, writer: &mut impl Write) -> io::Result<()> {
        if !molecule.has_charges() {
            return Ok(());
        }
        writeln!(writer)?;
        for atom in molecule {
            let Some(charge) = atom.charge else {
                continue;
            };
            let text = format!("{}: {:.4}", self.options.label_prefix, charge);
            writeln!(
                writer,
                "            viewer.addLabel(\"{}\", {{ position: {{ x: {:.8}, y: {:.8}, z: {:.8} }}, inFront: true, fontSize: {}, fontColor: 'black', backgroundColor: 'lightgray', backgroundOpacity: 0.7, showBackground: true }});",
                escape::js_string(&text),
                atom.x(),
                atom.y(),
                atom.z(),
                self.options.label_font_size
            )?;
        }
        Ok(())
    }
}

impl StructureWriter for ViewerDocument {
    type Error = ViewerError;

    fn write_to(&self, molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        if molecule.is_empty() {
            return Ok(());
        }
        let options = &self.options;

        write!(
            writer,
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{ font-family: sans-serif; margin: 0; }}
        .viewer_container {{
            width: 100vw;
            height: 100vh;
            position: relative;
        }}
    </style>
</head>
<body>
    <div id="container" class="viewer_container"></div>

    <script src="{library_url}"></script>

    <script>
        (function() {{
            let element = document.getElementById('container');
            let config = {{ backgroundColor: "{background}" }};
            let viewer = $3Dmol.createViewer(element, config);

            let xyz_data = "{xyz}";

            viewer.addModel(xyz_data, "xyz");
            viewer.setStyle({{}}, {{ stick: {{}}, sphere: {{ scale: {scale} }} }});
"#,
            title = escape::html(&options.title),
            library_url = escape::html(&options.library_url),
            background = escape::js_string(&options.background_color),
            xyz = escape::js_string(&self.xyz_data(molecule)),
            scale = options.sphere_scale,
        )?;

        self.write_labels(molecule, writer)?;

        write!(
            writer,
            r#"
            viewer.zoomTo();
            viewer.render();
        }})();
    </script>
</body>
</html>
"#
        )?;
        writer.flush()?;
        Ok(())
    }
}
