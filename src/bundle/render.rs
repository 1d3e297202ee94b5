//! Rendering a recipe to the packaging tool's spec file
//!
//! The output is the Python-syntax spec file PyInstaller consumes. The
//! rendering is pure string work so it stays deterministic and testable
//! without the packaging tool installed.

use super::recipe::BundleRecipe;

/// Render a recipe to spec-file text
pub fn render_spec(recipe: &BundleRecipe) -> String {
  let mut out = String::new();

  out.push_str("# -*- mode: python ; coding: utf-8 -*-\n");
  out.push_str("# Generated by ytm-ship; edit bundle.toml instead of this file.\n\n");

  out.push_str("a = Analysis(\n");
  out.push_str(&format!("    [{}],\n", py_str(&recipe.entry.to_string_lossy())));
  out.push_str("    pathex=[],\n");
  out.push_str("    binaries=[],\n");

  out.push_str("    datas=[\n");
  for data in &recipe.datas {
    out.push_str(&format!(
      "        ({}, {}),\n",
      py_str(&data.source.to_string_lossy()),
      py_str(&data.dest)
    ));
  }
  out.push_str("    ],\n");

  out.push_str("    hiddenimports=[\n");
  for import in &recipe.hidden_imports {
    out.push_str(&format!("        {},\n", py_str(import)));
  }
  out.push_str("    ],\n");

  out.push_str("    hookspath=[],\n");
  out.push_str("    runtime_hooks=[],\n");
  out.push_str("    excludes=[],\n");
  out.push_str(")\n\n");

  out.push_str("pyz = PYZ(a.pure)\n\n");

  out.push_str("exe = EXE(\n");
  out.push_str("    pyz,\n");
  out.push_str("    a.scripts,\n");
  out.push_str("    a.binaries,\n");
  out.push_str("    a.datas,\n");
  out.push_str("    [],\n");
  out.push_str(&format!("    name={},\n", py_str(&recipe.output.name)));
  out.push_str("    debug=False,\n");
  out.push_str(&format!("    strip={},\n", py_bool(recipe.output.strip)));
  out.push_str(&format!("    upx={},\n", py_bool(recipe.output.upx)));
  out.push_str(&format!("    console={},\n", py_bool(recipe.output.console)));
  out.push_str(")\n");

  out
}

/// Quote a string as a Python single-quoted literal
fn py_str(s: &str) -> String {
  format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn py_bool(b: bool) -> &'static str {
  if b { "True" } else { "False" }
}
