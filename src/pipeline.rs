//! Resolve, validate and emit in one call.

use crate::config::Platform;
use crate::emitter::{emit, DeviceMetadata};
use crate::error::BuildError;
use crate::interface::ProfileSpec;
use crate::resolver::resolve_with;
use crate::validator::validate_with;

/// Build device metadata for `spec` on the default platform.
pub fn build<'a>(spec: &ProfileSpec<'a>) -> Result<DeviceMetadata, BuildError<'a>> {
    build_with(spec, &Platform::DEFAULT)
}

/// Build device metadata for `spec` on `platform`.
///
/// Validation runs even though the resolver only produces consistent
/// devices; a non-empty report here means the resolver itself is wrong.
pub fn build_with<'a>(spec: &ProfileSpec<'a>, platform: &Platform) -> Result<DeviceMetadata, BuildError<'a>> {
    let device = resolve_with(spec, platform)?;

    let report = validate_with(&device, platform);
    if !report.is_valid() {
        return Err(report.into());
    }

    let metadata = emit(&device);
    debug!(
        "{}: {} interface(s), {} endpoint(s), {} buffer(s)",
        spec.name,
        metadata.num_interfaces,
        metadata.num_endpoints,
        metadata.num_buffers
    );
    Ok(metadata)
}
