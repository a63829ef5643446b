// src/record.rs
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytemuck::{Pod, Zeroable};

/// Size of one record field in bytes
pub const FIELD_SIZE: usize = std::mem::size_of::<f64>();

/// Number of fields in a record (longitude, latitude, height)
pub const FIELD_COUNT: usize = 3;

/// Size of one record on the wire. Shared by every read and write path.
pub const RECORD_SIZE: usize = FIELD_SIZE * FIELD_COUNT;

/// Raw bytes of a single record, exactly as they appear in the stream
pub type RecordBytes = [u8; RECORD_SIZE];

const _: () = assert!(std::mem::size_of::<GeoRecord>() == RECORD_SIZE);
const _: () = assert!(FIELD_SIZE % 2 == 0);

/// Byte order of the fields in a record stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Whatever the host uses
    #[default]
    Native,
    Little,
    Big,
}

impl Endianness {
    /// The byte order of the host
    pub const fn host() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    /// Resolve `Native` to a concrete order
    pub fn resolve(&self) -> Self {
        match self {
            Endianness::Native => Self::host(),
            other => *other,
        }
    }

    /// Whether values in this order must be reversed to be read on the host
    pub fn needs_swap(&self) -> bool {
        self.resolve() != Self::host()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endianness::Native => "native",
            Endianness::Little => "little",
            Endianness::Big => "big",
        }
    }
}

/// One xyz node: longitude, latitude and height as 64-bit floats
///
/// The in-memory layout matches the stream layout in host byte order, so a
/// record can be cast directly from [`RecordBytes`].
///
/// # Example
///
/// ```
/// use mbstrip_rs::record::{GeoRecord, RECORD_SIZE};
///
/// let record = GeoRecord::new(-122.0, 36.8, -1250.5);
/// let bytes = record.to_bytes();
/// assert_eq!(bytes.len(), RECORD_SIZE);
/// assert_eq!(GeoRecord::from_bytes(&bytes), record);
/// assert!(record.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct GeoRecord {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

impl GeoRecord {
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        GeoRecord { longitude, latitude, height }
    }

    /// Reinterpret host-order bytes as a record
    pub fn from_bytes(bytes: &RecordBytes) -> Self {
        bytemuck::pod_read_unaligned(bytes)
    }

    /// Host-order bytes of this record
    pub fn to_bytes(&self) -> RecordBytes {
        bytemuck::cast(*self)
    }

    /// Decode a record whose fields are stored in `order`
    pub fn decode(bytes: &RecordBytes, order: Endianness) -> Self {
        let mut fields = [0f64; FIELD_COUNT];
        match order.resolve() {
            Endianness::Big => BigEndian::read_f64_into(bytes, &mut fields),
            _ => LittleEndian::read_f64_into(bytes, &mut fields),
        }
        GeoRecord::new(fields[0], fields[1], fields[2])
    }

    /// Encode this record with its fields stored in `order`
    pub fn encode(&self, order: Endianness) -> RecordBytes {
        let mut bytes = [0u8; RECORD_SIZE];
        let fields = self.fields();
        match order.resolve() {
            Endianness::Big => BigEndian::write_f64_into(&fields, &mut bytes),
            _ => LittleEndian::write_f64_into(&fields, &mut bytes),
        }
        bytes
    }

    pub fn fields(&self) -> [f64; FIELD_COUNT] {
        [self.longitude, self.latitude, self.height]
    }

    /// True if any field holds a NaN
    pub fn has_nan(&self) -> bool {
        self.fields().iter().any(|value| value.is_nan())
    }

    /// A record is valid when none of its fields is NaN. Infinities are valid.
    pub fn is_valid(&self) -> bool {
        !self.has_nan()
    }
}
