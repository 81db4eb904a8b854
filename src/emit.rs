// This module provides backend emission: the final hand-off of a completed LLVM module
// to the native backend for object-file generation. Emission resolves the host's default
// target triple, constructs a target machine (generic CPU, no extra features, no
// optimization), fixes the module's triple and data layout to match, and runs object
// code generation. The object bytes render into an in-memory buffer first and reach disk
// in a single write, so a target-resolution or file failure aborts without leaving a
// partially written artifact. A successful run produces exactly one object file. The
// module handed in must be complete and internally consistent; that is the generator's
// contract, not checked here.

//! Object-file emission through the LLVM backend.

use crate::error::{CodegenError, CodegenResult};
use inkwell::module::Module;
use inkwell::targets::{CodeModel, FileType, InitializationConfig, RelocMode, Target, TargetMachine};
use inkwell::OptimizationLevel;
use std::fs;
use std::path::Path;

/// Emit `module` as a relocatable object file at `path`.
pub fn emit_object(module: &Module<'_>, path: &Path) -> CodegenResult<()> {
    Target::initialize_native(&InitializationConfig::default())
        .map_err(|reason| CodegenError::TargetResolution { reason })?;

    let triple = TargetMachine::get_default_triple();
    let target = Target::from_triple(&triple).map_err(|e| CodegenError::TargetResolution {
        reason: e.to_string(),
    })?;
    let machine = target
        .create_target_machine(
            &triple,
            "generic",
            "",
            OptimizationLevel::None,
            RelocMode::Default,
            CodeModel::Default,
        )
        .ok_or_else(|| CodegenError::TargetResolution {
            reason: format!("no target machine for {}", triple.as_str().to_string_lossy()),
        })?;

    module.set_triple(&triple);
    module.set_data_layout(&machine.get_target_data().get_data_layout());

    log::info!(
        "🎯 Emitting object code for {}",
        triple.as_str().to_string_lossy()
    );
    let buffer = machine
        .write_to_memory_buffer(module, FileType::Object)
        .map_err(|e| CodegenError::FileOpen {
            reason: e.to_string(),
        })?;
    fs::write(path, buffer.as_slice()).map_err(|e| CodegenError::FileOpen {
        reason: format!("{}: {e}", path.display()),
    })?;

    log::info!(
        "✅ Wrote {} bytes to {}",
        buffer.get_size(),
        path.display()
    );
    Ok(())
}
