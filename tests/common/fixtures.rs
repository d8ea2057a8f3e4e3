//! Static fragment sources used across harnesses.
//!
//! The valid fixtures are trimmed copies of real generated output (a camera
//! calibration project documented with Doxygen); the malformed ones each
//! break the format in exactly one way.

use std::path::Path;

/// An `all_*` fragment: page, file, and member records, including a
/// multi-target overload (`calibration_3`) and HTML entities in labels.
pub const FRAGMENT_ALL_C: &str = r#"var searchData=
[
  ['calib_0',['Calib',['../md_README.html',1,'']]],
  ['calibrate_2',['calibrate',['../classCalibration.html#a0575',1,'Calibration']]],
  ['calibration_3',['Calibration',['../classCalibration.html',1,'Calibration'],['../classCalibration.html#a4fd6',1,'Calibration::Calibration(const std::string &amp;dictionaryName)']]],
  ['camera_8',['Camera',['../classCamera.html',1,'Camera'],['../classCamera.html#a01f9',1,'Camera::Camera()']]],
  ['capture_13',['capture',['../classCamera.html#a813d',1,'Camera']]],
  ['close_21',['close',['../classCamCv.html#abecc',1,'CamCv::close()'],['../classCamera.html#a8988',1,'Camera::close()']]]
];
"#;

/// An `all_*` fragment for a different slot (keys starting with `u`).
pub const FRAGMENT_ALL_U: &str = r#"var searchData=
[
  ['unbind_0',['unbind',['../classgg_1_1GgTexture.html#a0694',1,'gg::GgTexture::unbind()'],['../classgg_1_1GgBuffer.html#a83a3',1,'gg::GgBuffer::unbind()']]],
  ['unmap_4',['unmap',['../classBuffer.html#a9b26',1,'Buffer::unmap()']]],
  ['update_6',['update',['../classFramebuffer.html#a145a',1,'Framebuffer::update(const std::array&lt; int, 2 &gt; &amp;size)']]],
  ['use_8',['use',['../classgg_1_1GgShader.html#a3605',1,'gg::GgShader']]]
];
"#;

/// The `functions_*` family covering the same symbols as
/// [`FRAGMENT_ALL_C`] under independently numbered keys.
pub const FRAGMENT_FUNCTIONS_C: &str = r#"var searchData=
[
  ['calibrate_0',['calibrate',['../classCalibration.html#a0575',1,'Calibration']]],
  ['capture_1',['capture',['../classCamera.html#a813d',1,'Camera']]],
  ['close_2',['close',['../classCamCv.html#abecc',1,'CamCv::close()']]]
];
"#;

/// A regenerated version of [`FRAGMENT_ALL_C`]: same keys, diverging
/// anchors — the duplicate-file artifact the merge policy has to absorb.
pub const FRAGMENT_ALL_C_REGEN: &str = r#"var searchData=
[
  ['calib_0',['Calib',['../md_README.html',1,'']]],
  ['calibrate_2',['calibrate',['../classCalibration.html#ffff',1,'Calibration']]],
  ['camera_8',['Camera',['../classCamera.html',1,'Camera']]]
];
"#;

// ---------------------------------------------------------------------------
// Malformed fragments
// ---------------------------------------------------------------------------

/// A record whose payload has a name but no targets.
pub const MALFORMED_NO_TARGETS: &str = "var searchData=[['calib_0',['Calib']]];";

/// A record that is an empty array.
pub const MALFORMED_EMPTY_RECORD: &str = "var searchData=[[]];";

/// Input that ends in the middle of a string literal.
pub const MALFORMED_TRUNCATED: &str = "var searchData=[['calib_0',['Cal";

/// A string literal with an escape the format never produces.
pub const MALFORMED_BAD_ESCAPE: &str = r"var searchData=[['k_0',['n\q',['u',1,'']]]];";

/// A target with the label field missing.
pub const MALFORMED_SHORT_TARGET: &str = "var searchData=[['k_0',['n',['../u.html',1]]]];";

/// Content after the closing `];`.
pub const MALFORMED_TRAILING_GARBAGE: &str = "var searchData=[]; var other=[];";

// ---------------------------------------------------------------------------
// Search-directory fixtures
// ---------------------------------------------------------------------------

/// Lay out a realistic `search/` directory under `root/html`, including the
/// auxiliary files a Doxygen build drops next to the fragments. Returns the
/// search dir path.
pub fn write_search_dir(root: &Path) -> std::path::PathBuf {
    let search = root.join("html").join("search");
    std::fs::create_dir_all(&search).unwrap();

    std::fs::write(search.join("all_3.js"), FRAGMENT_ALL_C).unwrap();
    std::fs::write(search.join("all_13.js"), FRAGMENT_ALL_U).unwrap();
    std::fs::write(search.join("functions_3.js"), FRAGMENT_FUNCTIONS_C).unwrap();
    std::fs::write(search.join("search.js"), "/* search widget runtime */").unwrap();
    std::fs::write(search.join("nomatches.html"), "<html></html>").unwrap();

    search
}
