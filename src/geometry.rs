//! WKB codec for spatial values.
//!
//! Encoding always emits little-endian WKB (byte-order flag `0x01`). Decoding
//! accepts either byte-order flag. A parameter-bound geometry is prefixed with
//! four zero SRID bytes, see [`encode_with_srid`].

use crate::constant::WkbGeometryType;
use crate::error::{Error, Result};

/// A single coordinate pair. Both components must be finite for the value to
/// be encodable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_encodable(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A spatial value, mirroring the WKB geometry taxonomy.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(Vec<Point>),
    Polygon(Vec<Vec<Point>>),
    MultiPoint(Vec<Point>),
    MultiLineString(Vec<Vec<Point>>),
    MultiPolygon(Vec<Vec<Vec<Point>>>),
    GeometryCollection(Vec<Geometry>),
}

/// Encode a geometry as WKB bytes.
///
/// Returns `None` when the value cannot be encoded (a non-finite coordinate
/// in a Point/LineString/Polygon). Multi* shapes and collections instead
/// truncate at the first failing element: the element count in the header
/// covers only the consecutively encoded prefix, so the buffer stays
/// structurally valid. Callers turn `None` into a protocol NULL.
pub fn encode(geometry: &Geometry) -> Option<Vec<u8>> {
    match geometry {
        Geometry::Point(point) => point_wkb(point),
        Geometry::LineString(points) => line_string_wkb(points),
        Geometry::Polygon(rings) => polygon_wkb(rings),
        Geometry::MultiPoint(points) => {
            Some(multi_wkb(WkbGeometryType::MultiPoint, points, point_wkb))
        }
        Geometry::MultiLineString(lines) => Some(multi_wkb(
            WkbGeometryType::MultiLineString,
            lines,
            |line| line_string_wkb(line.as_slice()),
        )),
        Geometry::MultiPolygon(polygons) => Some(multi_wkb(
            WkbGeometryType::MultiPolygon,
            polygons,
            |polygon| polygon_wkb(polygon.as_slice()),
        )),
        Geometry::GeometryCollection(children) => Some(multi_wkb(
            WkbGeometryType::GeometryCollection,
            children,
            encode,
        )),
    }
}

/// Encode a geometry for use as a bound parameter: four zero SRID bytes
/// followed by the WKB body.
pub fn encode_with_srid(geometry: &Geometry) -> Option<Vec<u8>> {
    let body = encode(geometry)?;
    let mut buf = Vec::with_capacity(4 + body.len());
    buf.extend_from_slice(&[0, 0, 0, 0]);
    buf.extend_from_slice(&body);
    Some(buf)
}

/// 9-byte WKB header: byte-order flag + type code + placeholder count.
fn multi_header(kind: WkbGeometryType) -> Vec<u8> {
    let mut buf = Vec::with_capacity(9);
    buf.push(0x01);
    buf.extend_from_slice(&(kind as u32).to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf
}

fn point_wkb(point: &Point) -> Option<Vec<u8>> {
    if !point.is_encodable() {
        return None;
    }
    let mut buf = Vec::with_capacity(21);
    buf.push(0x01);
    buf.extend_from_slice(&(WkbGeometryType::Point as u32).to_le_bytes());
    buf.extend_from_slice(&point.x.to_le_bytes());
    buf.extend_from_slice(&point.y.to_le_bytes());
    Some(buf)
}

fn line_string_wkb(points: &[Point]) -> Option<Vec<u8>> {
    let mut buf = Vec::with_capacity(9 + 16 * points.len());
    buf.push(0x01);
    buf.extend_from_slice(&(WkbGeometryType::LineString as u32).to_le_bytes());
    buf.extend_from_slice(&(points.len() as u32).to_le_bytes());
    for point in points {
        if !point.is_encodable() {
            return None;
        }
        buf.extend_from_slice(&point.x.to_le_bytes());
        buf.extend_from_slice(&point.y.to_le_bytes());
    }
    Some(buf)
}

fn polygon_wkb(rings: &[Vec<Point>]) -> Option<Vec<u8>> {
    let mut buf = Vec::with_capacity(9 + rings.iter().map(|r| 4 + 16 * r.len()).sum::<usize>());
    buf.push(0x01);
    buf.extend_from_slice(&(WkbGeometryType::Polygon as u32).to_le_bytes());
    buf.extend_from_slice(&(rings.len() as u32).to_le_bytes());
    for ring in rings {
        buf.extend_from_slice(&(ring.len() as u32).to_le_bytes());
        for point in ring {
            if !point.is_encodable() {
                return None;
            }
            buf.extend_from_slice(&point.x.to_le_bytes());
            buf.extend_from_slice(&point.y.to_le_bytes());
        }
    }
    Some(buf)
}

/// Shared Multi*/collection body: concatenate element encodings until one
/// fails, then patch the real count into the header.
fn multi_wkb<T>(
    kind: WkbGeometryType,
    elements: &[T],
    encode_element: impl Fn(&T) -> Option<Vec<u8>>,
) -> Vec<u8> {
    let mut buf = multi_header(kind);
    let mut count = 0u32;
    for element in elements {
        match encode_element(element) {
            Some(bytes) => {
                buf.extend_from_slice(&bytes);
                count += 1;
            }
            None => break,
        }
    }
    buf[5..9].copy_from_slice(&count.to_le_bytes());
    buf
}

// ============================================================================
// Decoding
// ============================================================================

struct WkbCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WkbCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::UnexpectedEof)?;
        if end > self.data.len() {
            return Err(Error::UnexpectedEof);
        }
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self, little_endian: bool) -> Result<u32> {
        let bytes: [u8; 4] = self.take(4)?.try_into().map_err(|_| Error::InvalidPacket)?;
        Ok(if little_endian {
            u32::from_le_bytes(bytes)
        } else {
            u32::from_be_bytes(bytes)
        })
    }

    fn read_f64(&mut self, little_endian: bool) -> Result<f64> {
        let bytes: [u8; 8] = self.take(8)?.try_into().map_err(|_| Error::InvalidPacket)?;
        Ok(if little_endian {
            f64::from_le_bytes(bytes)
        } else {
            f64::from_be_bytes(bytes)
        })
    }
}

/// Decode a WKB body (without SRID prefix) into a [`Geometry`].
///
/// Returns `Ok(None)` for an unrecognized geometry type tag; the caller maps
/// that to an absent value. Truncated or malformed payloads are errors.
pub fn decode(data: &[u8]) -> Result<Option<Geometry>> {
    decode_geometry(&mut WkbCursor::new(data))
}

fn decode_geometry(cur: &mut WkbCursor<'_>) -> Result<Option<Geometry>> {
    let little_endian = match cur.read_u8()? {
        0x00 => false,
        0x01 => true,
        _ => return Err(Error::InvalidPacket),
    };
    let code = cur.read_u32(little_endian)?;
    let Some(kind) = WkbGeometryType::from_u32(code) else {
        tracing::warn!(code, "unrecognized WKB geometry type tag");
        return Ok(None);
    };
    match kind {
        WkbGeometryType::Point => Ok(Some(Geometry::Point(decode_point(cur, little_endian)?))),
        WkbGeometryType::LineString => Ok(Some(Geometry::LineString(decode_points(
            cur,
            little_endian,
        )?))),
        WkbGeometryType::Polygon => {
            Ok(Some(Geometry::Polygon(decode_rings(cur, little_endian)?)))
        }
        WkbGeometryType::MultiPoint => {
            let mut points = Vec::new();
            for _ in 0..cur.read_u32(little_endian)? {
                match decode_geometry(cur)? {
                    Some(Geometry::Point(point)) => points.push(point),
                    Some(_) => return Err(Error::InvalidPacket),
                    None => return Ok(None),
                }
            }
            Ok(Some(Geometry::MultiPoint(points)))
        }
        WkbGeometryType::MultiLineString => {
            let mut lines = Vec::new();
            for _ in 0..cur.read_u32(little_endian)? {
                match decode_geometry(cur)? {
                    Some(Geometry::LineString(points)) => lines.push(points),
                    Some(_) => return Err(Error::InvalidPacket),
                    None => return Ok(None),
                }
            }
            Ok(Some(Geometry::MultiLineString(lines)))
        }
        WkbGeometryType::MultiPolygon => {
            let mut polygons = Vec::new();
            for _ in 0..cur.read_u32(little_endian)? {
                match decode_geometry(cur)? {
                    Some(Geometry::Polygon(rings)) => polygons.push(rings),
                    Some(_) => return Err(Error::InvalidPacket),
                    None => return Ok(None),
                }
            }
            Ok(Some(Geometry::MultiPolygon(polygons)))
        }
        WkbGeometryType::GeometryCollection => {
            let mut children = Vec::new();
            for _ in 0..cur.read_u32(little_endian)? {
                match decode_geometry(cur)? {
                    Some(child) => children.push(child),
                    None => return Ok(None),
                }
            }
            Ok(Some(Geometry::GeometryCollection(children)))
        }
    }
}

fn decode_point(cur: &mut WkbCursor<'_>, little_endian: bool) -> Result<Point> {
    let x = cur.read_f64(little_endian)?;
    let y = cur.read_f64(little_endian)?;
    Ok(Point { x, y })
}

fn decode_points(cur: &mut WkbCursor<'_>, little_endian: bool) -> Result<Vec<Point>> {
    let count = cur.read_u32(little_endian)?;
    let mut points = Vec::new();
    for _ in 0..count {
        points.push(decode_point(cur, little_endian)?);
    }
    Ok(points)
}

fn decode_rings(cur: &mut WkbCursor<'_>, little_endian: bool) -> Result<Vec<Vec<Point>>> {
    let count = cur.read_u32(little_endian)?;
    let mut rings = Vec::new();
    for _ in 0..count {
        rings.push(decode_points(cur, little_endian)?);
    }
    Ok(rings)
}

// ============================================================================
// Tests
// ============================================================================
