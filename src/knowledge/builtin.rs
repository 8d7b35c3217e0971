//! Tables shipped with the binary. Used unless a knowledge file is configured.

use std::collections::HashMap;

use super::vocabulary::VocabularyLists;
use super::KnowledgeTables;
use crate::models::{ConditionInfo, ConditionRecord, MedicineRecord};

pub fn tables() -> KnowledgeTables {
    KnowledgeTables {
        conditions: conditions(),
        condition_info: condition_info(),
        medicines: medicines(),
        vocabulary: vocabulary(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn condition(name: &str, symptoms: &[&str], medicines: &[&str]) -> ConditionRecord {
    ConditionRecord {
        name: name.into(),
        symptoms: strings(symptoms),
        medicines: strings(medicines),
    }
}

fn conditions() -> Vec<ConditionRecord> {
    vec![
        condition(
            "Common Cold",
            &["runny nose", "sneezing", "cough", "sore throat", "fatigue", "mild fever"],
            &["Paracetamol", "Cetirizine", "Dextromethorphan", "Phenylephrine"],
        ),
        condition(
            "Influenza",
            &["high fever", "body aches", "fatigue", "cough", "headache", "chills"],
            &["Oseltamivir", "Paracetamol", "Ibuprofen"],
        ),
        condition(
            "Migraine",
            &["severe headache", "nausea", "sensitivity to light", "vomiting", "visual disturbances"],
            &["Sumatriptan", "Ibuprofen", "Paracetamol", "Naproxen"],
        ),
        condition(
            "Hypertension",
            &["headache", "dizziness", "blurred vision", "chest pain", "shortness of breath"],
            &["Amlodipine", "Losartan", "Metoprolol", "Enalapril"],
        ),
        condition(
            "Diabetes Type 2",
            &["increased thirst", "frequent urination", "fatigue", "blurred vision", "slow healing"],
            &["Metformin", "Glipizide", "Insulin", "Sitagliptin"],
        ),
        condition(
            "Asthma",
            &["shortness of breath", "wheezing", "chest tightness", "cough", "difficulty breathing"],
            &["Salbutamol", "Budesonide", "Montelukast", "Theophylline"],
        ),
        condition(
            "Gastritis",
            &["stomach pain", "nausea", "vomiting", "bloating", "indigestion", "loss of appetite"],
            &["Omeprazole", "Ranitidine", "Antacids", "Sucralfate"],
        ),
        condition(
            "Anxiety Disorder",
            &["excessive worry", "restlessness", "fatigue", "difficulty concentrating", "muscle tension"],
            &["Sertraline", "Alprazolam", "Buspirone", "Escitalopram"],
        ),
        condition(
            "Allergic Rhinitis",
            &["sneezing", "runny nose", "itchy eyes", "nasal congestion", "postnasal drip"],
            &["Cetirizine", "Loratadine", "Fluticasone", "Montelukast"],
        ),
        condition(
            "Urinary Tract Infection",
            &["painful urination", "frequent urination", "lower abdominal pain", "cloudy urine", "fever"],
            &["Ciprofloxacin", "Nitrofurantoin", "Trimethoprim", "Amoxicillin"],
        ),
    ]
}

fn info(description: &str, diet: &[&str], precautions: &[&str]) -> ConditionInfo {
    ConditionInfo {
        description: description.into(),
        diet: strings(diet),
        precautions: strings(precautions),
    }
}

fn condition_info() -> HashMap<String, ConditionInfo> {
    [
        (
            "Common Cold",
            info(
                "A viral infection of the upper respiratory tract causing mild symptoms.",
                &["Warm fluids", "Vitamin C rich foods", "Ginger tea", "Honey", "Chicken soup"],
                &["Get plenty of rest", "Stay hydrated", "Avoid close contact with others", "Wash hands frequently"],
            ),
        ),
        (
            "Influenza",
            info(
                "A contagious respiratory illness caused by influenza viruses.",
                &["Clear broths", "Herbal teas", "Fresh fruits", "Yogurt", "Lean proteins"],
                &["Stay home and rest", "Cover coughs and sneezes", "Avoid crowds", "Get vaccinated annually"],
            ),
        ),
        (
            "Migraine",
            info(
                "A neurological condition characterized by intense, debilitating headaches.",
                &["Magnesium-rich foods", "Omega-3 fatty acids", "Fresh vegetables", "Whole grains", "Water"],
                &["Identify triggers", "Maintain sleep schedule", "Reduce stress", "Avoid bright lights"],
            ),
        ),
        (
            "Hypertension",
            info(
                "High blood pressure that can lead to serious cardiovascular complications.",
                &["Low sodium foods", "Fresh fruits", "Vegetables", "Whole grains", "Lean proteins"],
                &["Monitor blood pressure regularly", "Exercise regularly", "Limit alcohol", "Reduce stress"],
            ),
        ),
        (
            "Diabetes Type 2",
            info(
                "A chronic condition affecting how the body processes blood sugar.",
                &["Whole grains", "Leafy vegetables", "Lean proteins", "Low glycemic foods", "Healthy fats"],
                &["Monitor blood sugar", "Exercise regularly", "Take medications as prescribed", "Regular checkups"],
            ),
        ),
        (
            "Asthma",
            info(
                "A chronic respiratory condition causing airway inflammation and breathing difficulty.",
                &["Anti-inflammatory foods", "Omega-3 rich fish", "Fresh fruits", "Vegetables", "Adequate water"],
                &["Avoid triggers", "Use inhaler as prescribed", "Monitor symptoms", "Get flu vaccine"],
            ),
        ),
        (
            "Gastritis",
            info(
                "Inflammation of the stomach lining causing digestive discomfort.",
                &["Bland foods", "Lean proteins", "Non-acidic fruits", "Cooked vegetables", "Whole grains"],
                &["Avoid spicy foods", "Eat smaller meals", "Avoid alcohol", "Manage stress"],
            ),
        ),
        (
            "Anxiety Disorder",
            info(
                "A mental health condition characterized by excessive worry and fear.",
                &["Complex carbohydrates", "Omega-3 fatty acids", "Probiotics", "Herbal teas", "Magnesium-rich foods"],
                &["Practice relaxation techniques", "Regular exercise", "Adequate sleep", "Seek therapy"],
            ),
        ),
        (
            "Allergic Rhinitis",
            info(
                "An allergic response causing nasal inflammation and related symptoms.",
                &["Anti-inflammatory foods", "Vitamin C rich foods", "Local honey", "Probiotics", "Omega-3 fatty acids"],
                &["Avoid allergens", "Keep windows closed", "Use air purifiers", "Shower after outdoor activities"],
            ),
        ),
        (
            "Urinary Tract Infection",
            info(
                "A bacterial infection affecting the urinary system.",
                &["Cranberry juice", "Water", "Probiotics", "Vitamin C rich foods", "Avoid caffeine"],
                &["Stay hydrated", "Urinate frequently", "Wipe front to back", "Avoid irritating products"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, info)| (name.to_string(), info))
    .collect()
}

fn medicine(
    name: &str,
    category: Option<&str>,
    unit_price: Option<f64>,
    interacts_with: &[&str],
) -> MedicineRecord {
    MedicineRecord {
        name: name.into(),
        category: category.map(str::to_string),
        unit_price,
        interacts_with: strings(interacts_with),
    }
}

fn medicines() -> Vec<MedicineRecord> {
    vec![
        medicine("Paracetamol", Some("Pain Relief"), Some(2.50), &[]),
        medicine("Ibuprofen", Some("Anti-inflammatory"), Some(3.00), &[]),
        medicine("Cetirizine", Some("Antihistamine"), Some(4.50), &[]),
        medicine("Loratadine", Some("Antihistamine"), Some(5.00), &[]),
        medicine("Omeprazole", Some("Proton Pump Inhibitor"), Some(6.50), &["Clopidogrel"]),
        medicine("Ranitidine", Some("H2 Blocker"), Some(5.50), &[]),
        medicine("Metformin", Some("Antidiabetic"), Some(8.00), &["Alcohol"]),
        medicine("Glipizide", None, Some(12.00), &[]),
        medicine("Insulin", Some("Antidiabetic"), Some(25.00), &["Beta blockers", "Corticosteroids"]),
        medicine("Amlodipine", Some("Antihypertensive"), Some(7.00), &["Grapefruit"]),
        medicine("Losartan", None, Some(9.00), &[]),
        medicine("Metoprolol", None, Some(8.50), &[]),
        medicine("Enalapril", None, Some(7.50), &[]),
        medicine("Sertraline", Some("Antidepressant"), Some(15.00), &["Alprazolam", "MAO inhibitors"]),
        medicine("Alprazolam", None, Some(10.00), &["Opioids", "Alcohol", "Sertraline"]),
        medicine("Buspirone", None, Some(12.50), &[]),
        medicine("Escitalopram", None, Some(16.00), &[]),
        medicine("Salbutamol", Some("Bronchodilator"), Some(8.00), &[]),
        medicine("Budesonide", None, Some(18.00), &[]),
        medicine("Montelukast", None, Some(14.00), &[]),
        medicine("Sumatriptan", Some("Antimigraine"), Some(22.00), &[]),
        medicine("Naproxen", None, Some(4.50), &[]),
        medicine("Oseltamivir", None, Some(35.00), &[]),
        medicine("Ciprofloxacin", Some("Antibiotic"), Some(11.00), &["Antacids", "Dairy products"]),
        medicine("Nitrofurantoin", None, Some(13.00), &[]),
        medicine("Trimethoprim", None, Some(9.50), &[]),
        medicine("Amoxicillin", None, Some(7.00), &[]),
        medicine("Fluticasone", None, Some(16.50), &[]),
        medicine("Dextromethorphan", None, Some(5.50), &[]),
        medicine("Phenylephrine", None, Some(4.00), &[]),
        medicine("Sitagliptin", None, Some(28.00), &[]),
        medicine("Theophylline", None, Some(10.50), &[]),
        medicine("Antacids", None, Some(3.50), &[]),
        medicine("Sucralfate", None, Some(11.50), &[]),
        // Screened for interactions but not priced.
        medicine("Warfarin", None, None, &["Aspirin", "Ibuprofen", "Naproxen"]),
        medicine("Aspirin", None, None, &["Warfarin", "Ibuprofen"]),
        medicine("Simvastatin", None, None, &["Grapefruit", "Erythromycin"]),
    ]
}

fn vocabulary() -> VocabularyLists {
    VocabularyLists {
        symptoms: strings(&[
            "fever", "cough", "headache", "pain", "nausea", "vomiting", "diarrhea", "constipation",
            "fatigue", "weakness", "dizziness", "shortness of breath", "chest pain", "abdominal pain",
            "joint pain", "muscle pain", "back pain", "sore throat", "runny nose", "sneezing",
            "congestion", "wheezing", "rash", "itching", "swelling", "inflammation", "bleeding",
            "bruising", "numbness", "tingling", "blurred vision", "double vision", "hearing loss",
            "tinnitus", "loss of appetite", "weight loss", "weight gain", "insomnia", "anxiety",
            "depression", "confusion", "memory loss", "seizure", "tremor", "palpitations",
            "irregular heartbeat", "high blood pressure", "low blood pressure", "frequent urination",
            "painful urination", "blood in urine", "blood in stool", "jaundice", "yellowing",
        ]),
        diseases: strings(&[
            "diabetes", "hypertension", "asthma", "copd", "pneumonia", "bronchitis", "flu",
            "influenza", "common cold", "migraine", "gastritis", "ulcer", "gastroenteritis",
            "uti", "urinary tract infection", "kidney infection", "hepatitis", "cirrhosis",
            "anemia", "leukemia", "cancer", "tumor", "carcinoma", "arthritis", "osteoporosis",
            "fibromyalgia", "lupus", "rheumatoid arthritis", "psoriasis",
            "eczema", "dermatitis", "allergy", "allergic reaction", "anaphylaxis", "sepsis",
            "infection", "bacterial infection", "viral infection", "fungal infection",
            "heart disease", "coronary artery disease", "heart failure", "stroke", "tia",
            "transient ischemic attack", "epilepsy", "parkinson", "alzheimer", "dementia",
        ]),
        medications: strings(&[
            "paracetamol", "acetaminophen", "ibuprofen", "aspirin", "naproxen", "diclofenac",
            "metformin", "insulin", "glipizide", "sitagliptin", "amlodipine", "losartan",
            "metoprolol", "enalapril", "lisinopril", "atorvastatin", "simvastatin", "pravastatin",
            "omeprazole", "pantoprazole", "ranitidine", "cimetidine", "sertraline", "fluoxetine",
            "citalopram", "escitalopram", "alprazolam", "lorazepam", "diazepam", "salbutamol",
            "albuterol", "budesonide", "fluticasone", "montelukast", "cetirizine", "loratadine",
            "fexofenadine", "ciprofloxacin", "amoxicillin", "azithromycin", "doxycycline",
            "penicillin", "cephalexin", "nitrofurantoin", "trimethoprim", "sumatriptan",
            "rizatriptan", "warfarin", "heparin", "clopidogrel",
        ]),
        tests: strings(&[
            "blood test", "cbc", "complete blood count", "lipid panel", "liver function test",
            "lft", "kidney function test", "kft", "glucose test", "hba1c", "hemoglobin a1c",
            "cholesterol", "triglycerides", "creatinine", "bun", "alt", "ast", "bilirubin",
            "urine test", "urinalysis", "culture", "x-ray", "ct scan", "mri", "ultrasound",
            "ecg", "ekg", "echocardiogram", "stress test", "biopsy", "endoscopy", "colonoscopy",
            "mammogram", "pap smear", "psa test", "thyroid test", "tsh", "t3", "t4",
            "vitamin d", "b12", "folate", "iron", "ferritin",
        ]),
        // "fever" lives only in the symptom list so the lists stay disjoint.
        vitals: strings(&[
            "blood pressure", "bp", "systolic", "diastolic", "heart rate", "pulse", "hr",
            "temperature", "temp", "respiratory rate", "rr", "oxygen saturation",
            "spo2", "o2 sat", "weight", "height", "bmi", "body mass index", "blood sugar",
            "glucose", "blood glucose", "random blood sugar", "fasting blood sugar", "fbs",
            "postprandial", "ppbs",
        ]),
    }
}
