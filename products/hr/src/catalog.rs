use platform_db::EmployeeInput;

const SAMPLE_EMPLOYEES: &[(&str, &str, f64)] = &[
    ("Rahul Gupta", "Software Developer", 76000.25),
    ("Deepika Patel", "Marketing Specialist", 59000.50),
    ("Amit Kumar", "Accountant", 53000.00),
    ("Ananya Singh", "Customer Service Representative", 40500.75),
    ("Prakash Sharma", "Human Resources Manager", 82000.00),
    ("Neha Reddy", "Software Developer", 74000.25),
    ("Sanjay Mishra", "Marketing Specialist", 60000.50),
    ("Pooja Shah", "Accountant", 56000.00),
    ("Rajesh Patel", "Customer Service Representative", 43000.75),
    ("Nisha Desai", "Human Resources Manager", 83000.00),
    ("Ajay Verma", "Software Developer", 77000.25),
    ("Shreya Singh", "Marketing Specialist", 61000.50),
    ("Manoj Kumar", "Accountant", 54000.00),
    ("Sneha Sharma", "Customer Service Representative", 41000.75),
    ("Vivek Joshi", "Human Resources Manager", 84000.00),
    ("Meera Patel", "Software Developer", 78000.25),
    ("Raj Gupta", "Marketing Specialist", 62000.50),
    ("Aarti Sharma", "Accountant", 55000.00),
    ("Anand Singh", "Customer Service Representative", 42000.75),
    ("Divya Desai", "Human Resources Manager", 85000.00),
    ("Vikas Reddy", "Software Developer", 79000.25),
    ("Kavita Mishra", "Marketing Specialist", 63000.50),
    ("Amita Shah", "Accountant", 56000.00),
    ("Vinod Patel", "Customer Service Representative", 43000.75),
    ("Neeraj Desai", "Human Resources Manager", 86000.00),
    ("Priya Gupta", "Software Developer", 80000.25),
    ("Rahul Singh", "Marketing Specialist", 64000.50),
    ("Anjali Kumar", "Accountant", 57000.00),
    ("Arjun Sharma", "Customer Service Representative", 44000.75),
    ("Kiran Desai", "Human Resources Manager", 87000.00),
    ("Sarita Patel", "Software Developer", 81000.25),
    ("Pradeep Mishra", "Marketing Specialist", 65000.50),
    ("Nandini Shah", "Accountant", 58000.00),
    ("Rajeev Singh", "Customer Service Representative", 45000.75),
    ("Gaurav Desai", "Human Resources Manager", 88000.00),
    ("Sunita Gupta", "Software Developer", 82000.25),
    ("Pawan Singh", "Marketing Specialist", 66000.50),
    ("Anita Kumar", "Accountant", 59000.00),
    ("Suresh Sharma", "Customer Service Representative", 46000.75),
    ("Deepak Desai", "Human Resources Manager", 89000.00),
];

/// Fixed demo roster inserted by the seed endpoint and the `seed` command.
pub fn sample_employees() -> Vec<EmployeeInput> {
    SAMPLE_EMPLOYEES
        .iter()
        .map(|(name, position, salary)| EmployeeInput::new(*name, *position, *salary))
        .collect()
}
