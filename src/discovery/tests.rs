#[cfg(test)]
mod discovery_tests {
    use crate::array::{DataType, FmRole};
    use crate::discovery::{discover, parse_array_file_name};
    use crate::error::GenError;
    use ndarray::array;
    use ndarray_npy::write_npy;
    use std::fs;
    use tempfile::TempDir;

    fn write_pair(dir: &TempDir, index: usize) {
        let ifm = dir.path().join(format!("ifm{}.npy", index));
        let ofm = dir.path().join(format!("ofm{}.npy", index));
        write_npy(ifm, &array![1i8, 2, 3, 4]).unwrap();
        write_npy(ofm, &array![5i8, 6]).unwrap();
    }

    #[test]
    fn test_parse_array_file_name() {
        assert_eq!(parse_array_file_name("ifm0"), Some((FmRole::Ifm, 0)));
        assert_eq!(parse_array_file_name("ofm12"), Some((FmRole::Ofm, 12)));
        assert_eq!(parse_array_file_name("ifm01"), None);
        assert_eq!(parse_array_file_name("ifm"), None);
        assert_eq!(parse_array_file_name("input0"), None);
        assert_eq!(parse_array_file_name("ifm0_extra"), None);
    }

    #[test]
    fn test_counts_pairs_in_index_order() {
        let dir = TempDir::new().unwrap();
        for index in 0..3 {
            write_pair(&dir, index);
        }

        let found = discover(dir.path()).unwrap();
        assert_eq!(found.pair_count(), 3);
        assert_eq!(found.data_type, DataType::Int8);
        for (expected, pair) in found.pairs.iter().enumerate() {
            assert_eq!(pair.index, expected);
            assert!(pair.ifm.ends_with(format!("ifm{}.npy", expected)));
            assert!(pair.path(FmRole::Ofm).ends_with(format!("ofm{}.npy", expected)));
        }
    }

    #[test]
    fn test_infers_uint8_from_first_input() {
        let dir = TempDir::new().unwrap();
        write_npy(dir.path().join("ifm0.npy"), &array![1u8, 2]).unwrap();
        write_npy(dir.path().join("ofm0.npy"), &array![3u8]).unwrap();

        let found = discover(dir.path()).unwrap();
        assert_eq!(found.data_type, DataType::Uint8);
    }

    #[test]
    fn test_empty_folder_defaults_to_int8() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.txt"), "not an array").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let found = discover(dir.path()).unwrap();
        assert_eq!(found.pair_count(), 0);
        assert_eq!(found.data_type, DataType::Int8);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        write_npy(dir.path().join("ifm0.NPY"), &array![1i8]).unwrap();
        write_npy(dir.path().join("ofm0.npy"), &array![1i8]).unwrap();

        assert_eq!(discover(dir.path()).unwrap().pair_count(), 1);
    }

    #[test]
    fn test_missing_output_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_pair(&dir, 0);
        write_npy(dir.path().join("ifm1.npy"), &array![1i8, 2, 3, 4]).unwrap();

        match discover(dir.path()) {
            Err(GenError::MissingPairFile { role, index, .. }) => {
                assert_eq!(role, FmRole::Ofm);
                assert_eq!(index, 1);
            }
            other => panic!("expected MissingPairFile, got {:?}", other),
        }
    }

    #[test]
    fn test_index_gap_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_pair(&dir, 0);
        write_pair(&dir, 2);

        match discover(dir.path()) {
            Err(GenError::MissingPairFile { role, index, .. }) => {
                assert_eq!(role, FmRole::Ifm);
                assert_eq!(index, 1);
            }
            other => panic!("expected MissingPairFile, got {:?}", other),
        }
    }

    #[test]
    fn test_stray_npy_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_pair(&dir, 0);
        write_npy(dir.path().join("weights.npy"), &array![1i8]).unwrap();

        let err = discover(dir.path()).unwrap_err();
        assert!(matches!(err, GenError::UnexpectedArrayFile { .. }));
    }

    #[test]
    fn test_same_array_under_two_extensions_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_npy(dir.path().join("ifm0.npy"), &array![1i8, 2]).unwrap();
        write_npy(dir.path().join("ifm0.NPY"), &array![1i8, 2, 3]).unwrap();
        write_npy(dir.path().join("ofm0.npy"), &array![4i8]).unwrap();

        match discover(dir.path()) {
            Err(GenError::DuplicateArrayFile { first, second }) => {
                let mut names: Vec<String> = [first, second]
                    .iter()
                    .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                    .collect();
                names.sort();
                assert_eq!(names, vec!["ifm0.NPY", "ifm0.npy"]);
            }
            other => panic!("expected DuplicateArrayFile, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_folder_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = discover(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, GenError::ReadDir { .. }));
    }
}
