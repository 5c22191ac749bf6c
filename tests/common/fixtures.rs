//! Static search-index sources used across harnesses.
//!
//! `FUNCTIONS_I` is a cut-down Doxygen `functions_*.js` file in the exact
//! layout the generator writes, so byte-exact round trips can be checked
//! against it.

use std::path::Path;

/// A realistic `search/functions_9.js`: every record on its own line, two-space
/// indent, no trailing comma after the last record.
pub const FUNCTIONS_I: &str = "var searchData=
[
  ['imag',['imag',['../dd/dc0/namespaceComPWA_1_1Physics_1_1QFT.html#a2cce8524',1,'ComPWA::Physics::QFT']]],
  ['incoherentintensity',['IncoherentIntensity',['../db/dea/classIncoherentIntensity.html#accdc35b5',1,'ComPWA::Physics::HelicityFormalism::IncoherentIntensity']]],
  ['inilhtree',['IniLHtree',['../d5/d71/classMinLogLH.html#af44dc770',1,'ComPWA::Estimator::MinLogLH']]],
  ['init',['init',['../d8/d8a/classComPWA_1_1Logging.html#afbd84fee',1,'ComPWA::Logging::init()'],['../d7/d09/classComPWA_1_1TwoBodyKinematics.html#a571baf0f',1,'ComPWA::TwoBodyKinematics::init()'],['../d2/d94/classSliceFit.html#ad1525be5',1,'ComPWA::Estimator::SliceFit::SliceFit::init()']]],
  ['initaxis',['initAxis',['../d1/d9f/classNeatPlotting_1_1PlotAxis.html#afb4418c2',1,'NeatPlotting::PlotAxis::initAxis()'],['../d3/daa/classNeatPlotting_1_1PlotBundle.html#a2d07d772',1,'NeatPlotting::PlotBundle::initAxis()']]],
  ['initialise',['initialise',['../d0/daa/classComPWA_1_1GaussAmp.html#ac5bcf655',1,'ComPWA::GaussAmp']]],
  ['innerproduct',['InnerProduct',['../db/dd4/classTensor.html#a0a59a23e',1,'ComPWA::Physics::QFT::Tensor']]],
  ['insertnode',['insertNode',['../d3/de1/classComPWA_1_1FunctionTree.html#a89a33ea2',1,'ComPWA::FunctionTree']]],
  ['iswithinphsp',['IsWithinPhsp',['../db/d37/classComPWA_1_1Kinematics.html#aadb25c25',1,'ComPWA::Kinematics::IsWithinPhsp()'],['../d7/d09/classComPWA_1_1TwoBodyKinematics.html#aa56cf6b2',1,'ComPWA::TwoBodyKinematics::IsWithinPhsp()']]]
];
";

/// Number of records in [`FUNCTIONS_I`].
pub const FUNCTIONS_I_RECORDS: usize = 9;

/// A second page of the same section, as found in `functions_10.js`.
pub const FUNCTIONS_J: &str = "var searchData=
[
  ['jacobian',['Jacobian',['../d4/d1a/classComPWA_1_1Kinematics.html#a11',1,'ComPWA::Kinematics']]],
  ['jpsi',['JPsi',['../d9/d00/namespaceComPWA.html#a22',0,'ComPWA']]]
];
";

/// Records with operator and destructor keys, written the way Doxygen encodes
/// non-alphanumeric characters.
pub const SPECIAL_KEYS: &str = "var searchData=
[
  ['_7efunctiontree',['~FunctionTree',['../d3/de1/classFunctionTree.html#a01',1,'ComPWA::FunctionTree']]],
  ['operator_3c_3c',['operator&lt;&lt;',['../d1/d00/namespaceComPWA.html#a02',1,'ComPWA']]],
  ['operator_28_29',['operator()',['../d2/d00/classFunctor.html#a03',1,'Functor']]]
];
";

/// A file where two records are malformed and must be skipped.
pub const WITH_MALFORMED: &str = "var searchData=
[
  ['good',['good',['good.html#1',1,'Scope']]],
  ['nolabel'],
  [42,['bad key',['x.html',1,'X']]],
  ['also_5fgood',['also_good',['also.html#2',1,'Scope']]]
];
";

/// Write `src` to `dir/name`, creating `dir` if needed.
pub fn write_fixture(dir: &Path, name: &str, src: &str) {
    std::fs::create_dir_all(dir).expect("create fixture dir");
    std::fs::write(dir.join(name), src).expect("write fixture");
}

/// A temporary Doxygen `search/` directory holding the `functions` section
/// split over two files, plus an unrelated `classes` file.
pub fn search_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    // Written out of order on purpose; the loader sorts by numeric suffix.
    write_fixture(dir.path(), "functions_10.js", FUNCTIONS_J);
    write_fixture(dir.path(), "functions_9.js", FUNCTIONS_I);
    write_fixture(
        dir.path(),
        "classes_0.js",
        "var searchData=\n[\n  ['gaussamp',['GaussAmp',['../d0/daa/classGaussAmp.html',1,'ComPWA']]]\n];\n",
    );
    dir
}
