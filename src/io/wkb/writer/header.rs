use crate::error::{EncodeError, EncodeResult};
use crate::geometry::Dimension;
use crate::io::wkb::common::{
    FormatType, GeometryKind, NATIVE_HAS_M, NATIVE_HAS_SRID, NATIVE_HAS_Z, NATIVE_LITTLE_ENDIAN,
    NATIVE_MARKER, NATIVE_VECTORIAL, WKB_HAS_M, WKB_HAS_SRID, WKB_HAS_Z,
};
use crate::io::wkb::cursor::{Endianness, WriteCursor};

/// Everything the size and write passes need to know about the tree being encoded.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WriteContext {
    pub format: FormatType,
    pub version: u8,
    /// The dimension every coordinate is written with
    pub dimension: Dimension,
    /// The SRID written in the root header, if any
    pub srid: Option<i32>,
    /// How many collections enclose the geometry being written. Zero for the root.
    pub depth: usize,
    pub max_depth: usize,
}

impl WriteContext {
    pub(crate) fn root(
        format: FormatType,
        version: u8,
        dimension: Dimension,
        srid: Option<i32>,
        max_depth: usize,
    ) -> Self {
        Self {
            format,
            version,
            dimension,
            srid,
            depth: 0,
            max_depth,
        }
    }

    pub(crate) fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// The context of a member of the current geometry.
    pub(crate) fn child(&self) -> EncodeResult<Self> {
        let depth = self.depth + 1;
        if depth > self.max_depth {
            return Err(EncodeError::NestingTooDeep(self.max_depth));
        }
        Ok(Self { depth, ..*self })
    }

    /// The bytes taken by one coordinate.
    pub(crate) fn coord_size(&self) -> usize {
        self.dimension.size() * 8
    }

    fn root_srid(&self) -> Option<i32> {
        if self.is_root() {
            self.srid
        } else {
            None
        }
    }
}

/// The byte length of a geometry header, including the kind tag.
///
/// A native root header is three bytes, an optional SRID and the kind tag; native members have
/// only the kind tag. Every standard header is the byte order, the type field and, at the root
/// only, an optional SRID.
pub(crate) fn header_size(ctx: &WriteContext) -> usize {
    let srid = if ctx.root_srid().is_some() { 4 } else { 0 };
    match (ctx.format.is_native(), ctx.is_root()) {
        (true, true) => 3 + srid + 1,
        (true, false) => 1,
        (false, _) => 1 + 4 + srid,
    }
}

/// Write a geometry header, including the kind tag.
pub(crate) fn write_header(
    cursor: &mut WriteCursor,
    kind: GeometryKind,
    ctx: &WriteContext,
) -> EncodeResult<()> {
    let srid = ctx.root_srid();

    if ctx.format.is_native() {
        if ctx.is_root() {
            let mut byte_order = NATIVE_MARKER;
            if cursor.byte_order() == Endianness::LittleEndian {
                byte_order |= NATIVE_LITTLE_ENDIAN;
            }
            cursor.write_u8(byte_order)?;
            cursor.write_u8(ctx.version | NATIVE_VECTORIAL)?;

            let mut flags = 0;
            if ctx.dimension.has_z() {
                flags |= NATIVE_HAS_Z;
            }
            if ctx.dimension.has_m() {
                flags |= NATIVE_HAS_M;
            }
            if srid.is_some() {
                flags |= NATIVE_HAS_SRID;
            }
            cursor.write_u8(flags)?;

            if let Some(srid) = srid {
                cursor.write_i32(srid)?;
            }
        }
        cursor.write_u8(kind.into())?;
        return Ok(());
    }

    cursor.write_u8(cursor.byte_order().into())?;

    let mut geometry_type = u32::from(u8::from(kind));
    if ctx.dimension.has_z() {
        geometry_type |= WKB_HAS_Z;
    }
    if ctx.dimension.has_m() {
        geometry_type |= WKB_HAS_M;
    }
    if srid.is_some() {
        geometry_type |= WKB_HAS_SRID;
    }
    cursor.write_u32(geometry_type)?;

    if let Some(srid) = srid {
        cursor.write_i32(srid)?;
    }
    Ok(())
}

/// Convert a count to the 32-bit wire representation.
pub(crate) fn count_u32(count: usize) -> EncodeResult<u32> {
    u32::try_from(count).map_err(|_| EncodeError::Overflow(count))
}
