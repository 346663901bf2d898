//! WASM bindings for tensor transforms.
//!
//! `Transforms` is the host object handed to JavaScript. Each property on it
//! is a factory: calling it binds the transform parameters and returns an
//! operation that can be applied to any number of tensors.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const T = new Transforms();
//! const crop = T.centerCrop(224);          // 224x224 square
//! const out = crop(imageTensor);           // view into imageTensor
//! console.log(out.shape);                  // [3, 224, 224]
//! crop();                                  // throws "Tensor required as argument"
//! ```

use crate::logging::{console_debug, console_warn};
use crate::types::JsTensor;
use livevision_core::{CenterCrop, CropSize, TransformError, TransformKind};
use wasm_bindgen::prelude::*;

// Exported methods have a fixed parameter list, so the callable handed to
// JavaScript is a rest-parameter wrapper that reports the real argument
// count to `checkArgs` before forwarding the tensor.
#[wasm_bindgen(inline_js = r#"
export function bindCallable(op) {
    const name = op.name;
    const callable = function (...args) {
        op.checkArgs(args.length);
        return op.forward(args[0]);
    };
    Object.defineProperty(callable, "name", { value: name });
    return callable;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = bindCallable)]
    fn bind_callable(op: JsCenterCrop) -> js_sys::Function;
}

/// Host object exposing the transform factories by name.
#[wasm_bindgen(js_name = Transforms)]
#[derive(Debug)]
pub struct JsTransforms {
    kinds: Vec<TransformKind>,
}

#[wasm_bindgen(js_class = Transforms)]
impl JsTransforms {
    /// Create the host object. The name table is resolved once here.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsTransforms {
        let kinds = TransformKind::ALL.to_vec();
        console_debug!("Transforms ready: {:?}", TransformKind::property_names());
        JsTransforms { kinds }
    }

    /// Names of the transform factories available on this object.
    #[wasm_bindgen(js_name = propertyNames)]
    pub fn property_names(&self) -> Vec<String> {
        self.kinds.iter().map(|kind| kind.name().to_string()).collect()
    }

    /// Returns true if a factory with this name exists.
    #[wasm_bindgen(js_name = hasProperty)]
    pub fn has_property(&self, name: &str) -> bool {
        TransformKind::from_name(name).is_some_and(|kind| self.kinds.contains(&kind))
    }

    /// Bind a center crop and return it as a callable.
    ///
    /// The returned function takes exactly one `Tensor`. Calling it with any
    /// other number of arguments throws `Tensor required as argument`.
    ///
    /// # Arguments
    ///
    /// * `width` - Output width in pixels. When omitted, the crop is the
    ///   largest centered square.
    /// * `height` - Output height in pixels. When omitted, equals `width`.
    ///
    /// Sizes are not validated here; a crop that does not fit the tensor fails
    /// when it is applied.
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// T.centerCrop();          // min(H, W) square
    /// T.centerCrop(50);        // 50x50
    /// T.centerCrop(150, 80);   // 80 rows by 150 columns
    /// ```
    #[wasm_bindgen(js_name = centerCrop)]
    pub fn center_crop(&self, width: Option<f64>, height: Option<f64>) -> js_sys::Function {
        bind_callable(self.center_crop_op(width, height))
    }

    /// Bind a center crop and return the operation object.
    ///
    /// Same binding as `centerCrop`, exposed as a `CenterCrop` instance with
    /// a typed `forward(tensor)` method.
    #[wasm_bindgen(js_name = centerCropOp)]
    pub fn center_crop_op(&self, width: Option<f64>, height: Option<f64>) -> JsCenterCrop {
        let args: Vec<f64> = [width, height].into_iter().map_while(|v| v).collect();
        JsCenterCrop::bind(TransformKind::CenterCrop.build(&args))
    }

    /// Bind a center crop from a `{ width?, height? }` config object.
    ///
    /// # Errors
    /// Returns error if the config cannot be deserialized
    #[wasm_bindgen(js_name = centerCropFromConfig)]
    pub fn center_crop_from_config(&self, config: JsValue) -> Result<JsCenterCrop, JsValue> {
        let size: CropSize = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid crop config: {}", e)))?;
        Ok(JsCenterCrop::bind(CenterCrop::new(size)))
    }
}

impl Default for JsTransforms {
    fn default() -> Self {
        Self::new()
    }
}

/// A center crop bound to a fixed output size.
#[wasm_bindgen(js_name = CenterCrop)]
#[derive(Debug)]
pub struct JsCenterCrop {
    inner: CenterCrop,
}

#[wasm_bindgen(js_class = CenterCrop)]
impl JsCenterCrop {
    /// Display name, e.g. `CenterCrop(150, 80)`; `-1` marks an unspecified size.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.to_string()
    }

    /// Requested width, or `undefined` when inferred from the image
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> Option<f64> {
        self.inner.size().width.map(|v| v as f64)
    }

    /// Requested height, or `undefined` when inferred
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> Option<f64> {
        self.inner.size().height.map(|v| v as f64)
    }

    /// Crop a `[..., H, W]` tensor at its center.
    ///
    /// Returns a new `Tensor` that views the source storage. Passing anything
    /// other than a `Tensor` is rejected by the binding glue before this runs.
    ///
    /// # Errors
    /// Throws if the tensor has fewer than two dimensions or the crop does
    /// not fit inside the image (no padding is applied)
    pub fn forward(&self, tensor: &JsTensor) -> Result<JsTensor, JsValue> {
        self.crop(&[tensor]).map_err(|e| self.throw(e))
    }

    /// Reject a call that was not given exactly one argument.
    ///
    /// # Errors
    /// Throws `Tensor required as argument` when `count != 1`
    #[wasm_bindgen(js_name = checkArgs)]
    pub fn check_args(&self, count: usize) -> Result<(), JsValue> {
        CenterCrop::check_arity(count).map_err(|e| self.throw(e))
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.name()
    }
}

impl JsCenterCrop {
    fn bind(inner: CenterCrop) -> Self {
        console_debug!("bound {}", inner);
        Self { inner }
    }

    fn throw(&self, err: TransformError) -> JsValue {
        console_warn!("{} failed: {}", self.inner, err);
        JsValue::from(js_sys::Error::new(&err.to_string()))
    }

    /// Run the crop on a host argument list.
    pub(crate) fn crop(&self, args: &[&JsTensor]) -> Result<JsTensor, TransformError> {
        let tensors: Vec<_> = args.iter().map(|t| t.tensor()).collect();
        self.inner.invoke(&tensors).map(JsTensor::from_tensor)
    }
}


/// WASM-specific tests that require JsValue.
///
/// These tests pass config objects or hit error paths that build a `JsValue`,
/// so they can only run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Serialize;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    struct TestConfig {
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<i64>,
    }

    fn config(width: Option<i64>, height: Option<i64>) -> JsValue {
        serde_wasm_bindgen::to_value(&TestConfig { width, height }).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_config_explicit() {
        let crop = JsTransforms::new()
            .center_crop_from_config(config(Some(150), Some(80)))
            .unwrap();
        assert_eq!(crop.name(), "CenterCrop(150, 80)");
    }

    #[wasm_bindgen_test]
    fn test_config_empty() {
        let crop = JsTransforms::new()
            .center_crop_from_config(config(None, None))
            .unwrap();
        assert_eq!((crop.width(), crop.height()), (None, None));
    }

    #[wasm_bindgen_test]
    fn test_config_invalid() {
        let result = JsTransforms::new().center_crop_from_config(JsValue::from_str("224"));
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_forward_too_large_throws() {
        let img = JsTensor::new(vec![0.0; 3 * 10 * 10], vec![3, 10, 10]).unwrap();
        let crop = JsTransforms::new().center_crop_op(Some(11.0), None);
        let err = crop.forward(&img).unwrap_err();
        assert!(err.is_instance_of::<js_sys::Error>());
    }

    #[wasm_bindgen_test]
    fn test_forward_rank_one_throws() {
        let img = JsTensor::new(vec![0.0; 10], vec![10]).unwrap();
        let crop = JsTransforms::new().center_crop_op(None, None);
        assert!(crop.forward(&img).is_err());
    }

    fn tensor_value(height: usize, width: usize) -> JsValue {
        JsValue::from(JsTensor::new(vec![0.0; 3 * height * width], vec![3, height, width]).unwrap())
    }

    fn error_message(err: JsValue) -> String {
        let err: js_sys::Error = err.dyn_into().unwrap();
        String::from(err.message())
    }

    #[wasm_bindgen_test]
    fn test_callable_crops_single_tensor() {
        let crop = JsTransforms::new().center_crop(None, None);
        let out = crop.call1(&JsValue::NULL, &tensor_value(100, 200)).unwrap();
        let shape = js_sys::Reflect::get(&out, &JsValue::from_str("shape")).unwrap();
        assert_eq!(js_sys::Uint32Array::from(shape).to_vec(), vec![3, 100, 100]);
    }

    #[wasm_bindgen_test]
    fn test_callable_without_arguments_throws() {
        let crop = JsTransforms::new().center_crop(Some(50.0), None);
        let err = crop.call0(&JsValue::NULL).unwrap_err();
        assert!(error_message(err).starts_with("Tensor required as argument"));
    }

    #[wasm_bindgen_test]
    fn test_callable_with_two_arguments_throws() {
        let crop = JsTransforms::new().center_crop(Some(50.0), None);
        let err = crop
            .call2(&JsValue::NULL, &tensor_value(100, 200), &tensor_value(100, 200))
            .unwrap_err();
        assert!(error_message(err).starts_with("Tensor required as argument"));
    }

    #[wasm_bindgen_test]
    fn test_callable_rejects_non_tensor() {
        let crop = JsTransforms::new().center_crop(None, None);
        assert!(crop.call1(&JsValue::NULL, &JsValue::from_f64(3.0)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_callable_name() {
        let crop = JsTransforms::new().center_crop(Some(150.0), Some(80.0));
        assert_eq!(String::from(crop.name()), "CenterCrop(150, 80)");
    }

    #[wasm_bindgen_test]
    fn test_check_args_throws_on_wrong_count() {
        let crop = JsTransforms::new().center_crop_op(None, None);
        for count in [0, 2] {
            let err = crop.check_args(count).unwrap_err();
            assert!(error_message(err).starts_with("Tensor required as argument"));
        }
    }
}
