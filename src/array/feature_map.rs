use super::DataType;
use crate::error::GenError;
use log::trace;
use ndarray::ArrayD;
use ndarray_npy::{ReadNpyError, ReadNpyExt, ReadableElement};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A loaded `.npy` array, flattened to row-major element bytes.
/// Signed elements are kept as their two's-complement byte so that the
/// emitted literal is exactly what ends up in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureMap {
    data_type: DataType,
    shape: Vec<usize>,
    data: Vec<u8>,
}

impl FeatureMap {
    pub fn new(data_type: DataType, shape: Vec<usize>, data: Vec<u8>) -> Self {
        Self {
            data_type,
            shape,
            data,
        }
    }

    /// Loads an int8 or uint8 array of any rank.
    /// The element type is taken from the file's own descriptor; anything
    /// other than `|i1` / `|u1` is rejected.
    pub fn load(path: &Path) -> Result<FeatureMap, GenError> {
        let map = match read_array::<i8>(path) {
            Ok(array) => Self::new(
                DataType::Int8,
                array.shape().to_vec(),
                array.iter().map(|&v| v as u8).collect(),
            ),
            Err(ReadNpyError::WrongDescriptor(_)) => match read_array::<u8>(path) {
                Ok(array) => Self::new(
                    DataType::Uint8,
                    array.shape().to_vec(),
                    array.iter().copied().collect(),
                ),
                Err(source @ ReadNpyError::WrongDescriptor(_)) => {
                    return Err(GenError::UnsupportedDtype {
                        path: path.to_path_buf(),
                        source,
                    })
                }
                Err(source) => {
                    return Err(GenError::LoadArray {
                        path: path.to_path_buf(),
                        source,
                    })
                }
            },
            Err(source) => {
                return Err(GenError::LoadArray {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        trace!(
            "loaded {} as {} with shape {:?}",
            path.display(),
            map.data_type,
            map.shape
        );
        Ok(map)
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Flattened elements in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of the array in bytes (element count times item size).
    pub fn byte_size(&self) -> usize {
        self.data.len() * self.data_type.item_size()
    }
}

fn read_array<A: ReadableElement>(path: &Path) -> Result<ArrayD<A>, ReadNpyError> {
    let file = File::open(path).map_err(ReadNpyError::Io)?;
    ArrayD::<A>::read_npy(BufReader::new(file))
}
